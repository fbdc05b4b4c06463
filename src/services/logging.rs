use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

pub fn get_builder() -> tauri_plugin_log::Builder {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .clear_targets()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} [{}:{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                message
            ))
        })
        .target(Target::new(TargetKind::Stdout))
        .target(Target::new(TargetKind::LogDir {
            file_name: Some("sentiment-analyzer".to_string()),
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_constructs() {
        let _builder = get_builder();
    }
}
