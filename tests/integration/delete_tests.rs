//! DELETE /1/boards/:id

use crate::common::{authenticated_client, fake_server};
use reqwest::StatusCode;
use trello_boards_client::{factory, ApiClientError};

#[tokio::test]
async fn test_delete_board_by_id() {
    let (server, fake) = fake_server().await;
    let api = authenticated_client(&server);

    let created = api
        .create_boards(&[factory::board().name("board1"), factory::board().name("board2")])
        .await;
    let board1 = created[0].as_ref().unwrap();
    let board2 = created[1].as_ref().unwrap();

    let response = api.delete_board(&board1.id).await.expect("delete failed");
    assert!(response.value().is_none());
    assert_eq!(fake.board_count(), 1);

    // the other board is untouched
    let remaining = api.get_board(&board2.id, None).await.unwrap();
    assert_eq!(remaining.name, "board2");
}

#[tokio::test]
async fn test_delete_already_deleted_board_is_not_found() {
    let (server, _fake) = fake_server().await;
    let api = authenticated_client(&server);

    let board = api.create_board(&factory::board().to_query()).await.unwrap();
    api.delete_board(&board.id).await.unwrap();

    let err = api.delete_board(&board.id).await.unwrap_err();
    match &err {
        ApiClientError::HttpError { status, url, .. } => {
            assert_eq!(*status, StatusCode::NOT_FOUND);
            assert_eq!(url.as_deref(), Some(format!("/1/boards/{}", board.id).as_str()));
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_boards_reports_each_result_in_order() {
    let (server, fake) = fake_server().await;
    let api = authenticated_client(&server);

    let created = api
        .create_boards(&[factory::board(), factory::board()])
        .await;
    let mut ids: Vec<String> = created.into_iter().map(|r| r.unwrap().id).collect();
    ids.insert(1, "000000000000000000000000".to_string());

    let results = api.delete_boards(ids.as_slice()).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].as_ref().unwrap_err().is_not_found());
    assert!(results[2].is_ok());
    assert_eq!(fake.board_count(), 0);
}
