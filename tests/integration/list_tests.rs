//! GET /1/members/me/boards

use crate::common::{authenticated_client, fake_server};
use trello_boards_client::{factory, BoardFilter, BoardParams};

#[tokio::test]
async fn test_list_is_empty_without_boards() {
    let (server, _fake) = fake_server().await;
    let api = authenticated_client(&server);

    let boards = api.get_list_of_boards(None).await.unwrap();
    assert!(boards.is_empty());
}

#[tokio::test]
async fn test_list_returns_exactly_the_created_boards() {
    let (server, _fake) = fake_server().await;
    let api = authenticated_client(&server);

    let to_create: Vec<BoardParams> = (0..3).map(|_| factory::board()).collect();
    let created: Vec<_> = api
        .create_boards(&to_create)
        .await
        .into_iter()
        .map(|r| r.expect("create failed"))
        .collect();

    let listed = api.get_list_of_boards(None).await.unwrap();

    assert_eq!(listed.len(), created.len());
    for board in &created {
        let found = listed
            .iter()
            .find(|b| b.id == board.id)
            .unwrap_or_else(|| panic!("board {} missing from list", board.id));
        assert_eq!(found.name, board.name);
        assert_eq!(found.desc, board.desc);
        assert_eq!(found.closed, board.closed);
    }
}

#[tokio::test]
async fn test_list_with_fields_and_filter() {
    let (server, _fake) = fake_server().await;
    let api = authenticated_client(&server);

    let open = api
        .create_board(&BoardParams::named("open one").to_query())
        .await
        .unwrap();
    let closing = api
        .create_board(&BoardParams::named("closing one").to_query())
        .await
        .unwrap();
    api.update_board(&closing.id, &BoardParams::new().closed(true).to_query())
        .await
        .unwrap();

    let query = BoardParams::new()
        .fields(["name", "closed"])
        .filter(BoardFilter::Open)
        .to_query();
    let listed = api.get_list_of_boards(Some(&query)).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, open.id);
    assert_eq!(listed[0].name, "open one");
    assert!(listed[0].prefs.is_none());

    let closed = api
        .get_list_of_boards(Some(&BoardParams::new().filter(BoardFilter::Closed).to_query()))
        .await
        .unwrap();
    assert_eq!(closed.len(), 1);
    assert!(closed[0].closed);
}

#[tokio::test]
async fn test_cleanup_through_list_leaves_nothing_behind() {
    let (server, fake) = fake_server().await;
    let api = authenticated_client(&server);

    let to_create = [factory::board(), factory::board()];
    for result in api.create_boards(&to_create).await {
        result.unwrap();
    }

    let ids: Vec<String> = api
        .get_list_of_boards(None)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    for result in api.delete_boards(ids.as_slice()).await {
        result.unwrap();
    }

    assert_eq!(fake.board_count(), 0);
    assert!(api.get_list_of_boards(None).await.unwrap().is_empty());
}
