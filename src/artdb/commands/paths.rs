use crate::commands::{ArtdbPaths, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(paths: &ArtdbPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "data dir: {}",
        paths.data_dir.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "snapshot: {}",
        paths.snapshot.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "config:   {}",
        paths.config_file().display()
    )));
    Ok(result)
}
