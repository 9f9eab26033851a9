//! Basic document adapter operation tests
//!
//! Tests collection lifecycle and document CRUD against a temporary redb file

use envstore::doc_adapter::DocAdapter;
use envstore_doc_adapter_redb::DocAdapterRedb;
use serde_json::json;
use tempfile::TempDir;

async fn create_test_adapter() -> (DocAdapterRedb, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = DocAdapterRedb::new(temp_dir.path()).await.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_save_assigns_id() {
	let (adapter, _temp) = create_test_adapter().await;

	let stored = adapter
		.save("app_one", json!({"name": "url", "stringValue": "http://x", "id": "client"}))
		.await
		.expect("Failed to save document");

	let id = stored["id"].as_str().expect("id should be a string");
	assert_ne!(id, "client");
	assert_eq!(id.len(), 24);
	assert_eq!(stored["name"], json!("url"));

	let docs = adapter.find_all("app_one").await.expect("Failed to find documents");
	assert_eq!(docs, vec![stored]);
}

#[tokio::test]
async fn test_save_rejects_non_object() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(adapter.save("app_one", json!(["not", "an", "object"])).await.is_err());
	assert!(adapter.list_collections().await.expect("Failed to list").is_empty());
}

#[tokio::test]
async fn test_find_all_unknown_collection() {
	let (adapter, _temp) = create_test_adapter().await;

	let docs = adapter.find_all("app_missing").await.expect("Failed to find documents");

	assert!(docs.is_empty());
}

#[tokio::test]
async fn test_collections_are_isolated() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.save("app_a", json!({"name": "x"})).await.expect("Failed to save");
	adapter.save("app_ab", json!({"name": "y"})).await.expect("Failed to save");
	adapter.save("app_ab", json!({"name": "z"})).await.expect("Failed to save");

	assert_eq!(adapter.find_all("app_a").await.expect("Failed to find").len(), 1);
	assert_eq!(adapter.find_all("app_ab").await.expect("Failed to find").len(), 2);
	assert_eq!(adapter.count_documents("app_a").await.expect("Failed to count"), 1);
	assert_eq!(adapter.count_documents("app_ab").await.expect("Failed to count"), 2);
	assert_eq!(adapter.count_documents("app_abc").await.expect("Failed to count"), 0);
}

#[tokio::test]
async fn test_collection_names_with_control_characters() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.save("app_a\u{1f}b", json!({"name": "secret"})).await.expect("Failed to save");
	adapter.save("app_a", json!({"name": "own"})).await.expect("Failed to save");

	let docs = adapter.find_all("app_a").await.expect("Failed to find");
	assert_eq!(docs.len(), 1);
	assert_eq!(docs[0]["name"], json!("own"));
	assert_eq!(adapter.count_documents("app_a").await.expect("Failed to count"), 1);

	let removed =
		adapter.remove("app_a", "name", &json!("secret")).await.expect("Failed to remove");
	assert_eq!(removed, 0);

	adapter.drop_collection("app_a").await.expect("Failed to drop collection");
	assert_eq!(adapter.count_documents("app_a\u{1f}b").await.expect("Failed to count"), 1);
	assert_eq!(
		adapter.find_all("app_a\u{1f}b").await.expect("Failed to find")[0]["name"],
		json!("secret")
	);
}

#[tokio::test]
async fn test_remove_by_field() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.save("app_one", json!({"name": "keep"})).await.expect("Failed to save");
	adapter.save("app_one", json!({"name": "drop"})).await.expect("Failed to save");
	adapter.save("app_one", json!({"name": "drop"})).await.expect("Failed to save");

	let removed =
		adapter.remove("app_one", "name", &json!("drop")).await.expect("Failed to remove");
	assert_eq!(removed, 2);

	let docs = adapter.find_all("app_one").await.expect("Failed to find documents");
	assert_eq!(docs.len(), 1);
	assert_eq!(docs[0]["name"], json!("keep"));

	// Emptied collections stay registered until dropped
	let removed =
		adapter.remove("app_one", "name", &json!("keep")).await.expect("Failed to remove");
	assert_eq!(removed, 1);
	let collections = adapter.list_collections().await.expect("Failed to list collections");
	assert_eq!(collections, vec![Box::from("app_one")]);
}

#[tokio::test]
async fn test_remove_by_id() {
	let (adapter, _temp) = create_test_adapter().await;

	let stored = adapter.save("app_one", json!({"name": "x"})).await.expect("Failed to save");

	let removed = adapter.remove("app_one", "id", &stored["id"]).await.expect("Failed to remove");

	assert_eq!(removed, 1);
	assert_eq!(adapter.count_documents("app_one").await.expect("Failed to count"), 0);
}

#[tokio::test]
async fn test_remove_from_unknown_collection() {
	let (adapter, _temp) = create_test_adapter().await;

	let removed =
		adapter.remove("app_missing", "name", &json!("x")).await.expect("Failed to remove");

	assert_eq!(removed, 0);
	assert!(adapter.list_collections().await.expect("Failed to list").is_empty());
}

#[tokio::test]
async fn test_drop_collection() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.save("app_one", json!({"name": "x"})).await.expect("Failed to save");
	adapter.save("app_two", json!({"name": "y"})).await.expect("Failed to save");

	adapter.drop_collection("app_one").await.expect("Failed to drop collection");
	adapter.drop_collection("app_never").await.expect("Dropping unknown collection failed");

	let collections = adapter.list_collections().await.expect("Failed to list collections");
	assert_eq!(collections, vec![Box::from("app_two")]);
	assert!(adapter.find_all("app_one").await.expect("Failed to find").is_empty());
	assert_eq!(adapter.count_documents("app_two").await.expect("Failed to count"), 1);
}

#[tokio::test]
async fn test_reopen_keeps_documents() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	{
		let adapter = DocAdapterRedb::new(temp_dir.path()).await.expect("Failed to create adapter");
		adapter.save("app_one", json!({"name": "x"})).await.expect("Failed to save");
		adapter.close().await.expect("Failed to close");
	}

	let adapter = DocAdapterRedb::new(temp_dir.path()).await.expect("Failed to reopen adapter");
	assert_eq!(adapter.count_documents("app_one").await.expect("Failed to count"), 1);
}

#[tokio::test]
async fn test_closed_store_fails() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.close().await.expect("Failed to close");
	adapter.close().await.expect("Closing twice failed");

	let err = adapter.find_all("app_one").await.expect_err("Read after close should fail");
	assert_eq!(err.to_string(), "Document store is closed");
}

// vim: ts=4
