// ==========================================
// 参赛数据导入系统 - 命令行入口
// ==========================================
// 用法:
//   contest-import import <文件路径> [记录类别]
//   contest-import list
//   contest-import delete <批次标识>
// 环境变量:
//   CONTEST_IMPORT_DB - 数据库路径（默认: 用户数据目录）
// ==========================================

use contest_import::config::ImportConfig;
use contest_import::{api::RecordApi, db, logging};
use std::env;
use std::process::ExitCode;

fn resolve_db_path() -> String {
    if let Ok(path) = env::var("CONTEST_IMPORT_DB") {
        return path;
    }

    let default_path = db::default_db_path();
    if let Some(parent) = default_path.parent() {
        // 首次运行时数据目录可能不存在
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(error = %e, "创建数据目录失败，回退到当前目录");
            return "records.db".to_string();
        }
    }
    default_path.display().to_string()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn print_usage() {
    eprintln!("用法:");
    eprintln!("  contest-import import <文件路径> [记录类别]");
    eprintln!("  contest-import list");
    eprintln!("  contest-import delete <批次标识>");
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("{} v{}", contest_import::APP_NAME, contest_import::VERSION);

    let db_path = resolve_db_path();
    tracing::info!(db_path = %db_path, "使用数据库");

    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        Some("import") => {
            let Some(file_path) = args.get(2) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            let config = match args.get(3) {
                Some(record_type) => ImportConfig::with_record_type(record_type.clone()),
                None => ImportConfig::default(),
            };
            let api = RecordApi::new(db_path, config);
            api.import_records(file_path)
                .await
                .map_err(|e| e.to_string())
                .and_then(|response| to_json(&response))
        }
        Some("list") => {
            let api = RecordApi::new(db_path, ImportConfig::default());
            api.list_record_batches()
                .await
                .map_err(|e| e.to_string())
                .and_then(|groups| to_json(&groups))
        }
        Some("delete") => {
            let Some(batch_id) = args.get(2) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            let api = RecordApi::new(db_path, ImportConfig::default());
            api.delete_record_batch(batch_id)
                .await
                .map_err(|e| e.to_string())
                .and_then(|response| to_json(&response))
        }
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
