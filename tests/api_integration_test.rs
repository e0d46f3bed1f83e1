// ==========================================
// RecordApi 集成测试
// ==========================================
// 测试目标: 导入/查询/删除三个对外操作的端到端行为
// ==========================================

mod test_helpers;

use contest_import::api::{ApiError, RecordApi};
use contest_import::config::ImportConfig;
use contest_import::logging;
use test_helpers::{batch_id_of, create_test_db, write_csv};

#[tokio::test]
async fn test_import_list_delete_flow() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::default());

    // 导入
    let csv = write_csv(&["name,cmnd", "Alice,123", "Bob,456"]);
    let response = api
        .import_records(&csv.path().display().to_string())
        .await
        .expect("Import should succeed");
    assert_eq!(response.imported, 2);
    assert_eq!(response.import_batch, batch_id_of(&csv));

    // 查询
    let batches = api.list_record_batches().await.unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].count, 2);

    // 删除
    let deleted = api.delete_record_batch(&batch_id_of(&csv)).await.unwrap();
    assert_eq!(deleted.deleted, 2);

    let batches = api.list_record_batches().await.unwrap();
    assert!(batches.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_batch_is_not_found() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::default());

    let result = api.delete_record_batch("missing.xlsx").await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_blank_batch_id_is_invalid_input() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::default());

    let result = api.delete_record_batch("  ").await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[tokio::test]
async fn test_import_error_surfaces_sheet_context() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::default());

    let csv = write_csv(&["name,email", "Alice,a@example.com"]);
    let result = api.import_records(&csv.path().display().to_string()).await;

    match result {
        Err(ApiError::ImportFailed(msg)) => {
            // 错误信息可定位到行
            assert!(msg.contains("行 2"), "message was: {}", msg);
        }
        other => panic!("Expected ImportFailed, got {:?}", other.is_ok()),
    }
}

#[tokio::test]
async fn test_record_type_from_config() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::with_record_type("judge"));

    let csv = write_csv(&["cccd", "999"]);
    let response = api
        .import_records(&csv.path().display().to_string())
        .await
        .unwrap();
    assert_eq!(response.imported, 1);
}

#[tokio::test]
async fn test_import_bytes_requires_batch_id() {
    logging::init_test();

    let (_temp_db, db_path) = create_test_db();
    let api = RecordApi::new(db_path, ImportConfig::default());

    let result = api.import_workbook_bytes(vec![1, 2, 3], "").await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}
