use crate::common::*;
use assert_json_diff::assert_json_include;
use extendz::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_get_user_virtual_cards_sends_pageable_body() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;

    let request = VirtualCardPageableRequest::new()
        .with_page(25, 0)
        .with_status("ACTIVE");
    let list = server
        .mock("GET", "/virtualcards")
        .match_header("authorization", "Bearer access-1")
        .match_header("accept", ACCEPT)
        .match_body(Matcher::Json(serde_json::to_value(&request).unwrap()))
        .with_body(VIRTUAL_CARDS_JSON)
        .create_async()
        .await;

    let response = client.get_user_virtual_cards(&request).await.unwrap();

    assert_eq!(response.virtual_cards.len(), 2);
    assert_eq!(response.virtual_cards[0].id, "vc_1234");
    list.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_get_virtual_card() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let get = server
        .mock("GET", "/virtualcards/vc_1234")
        .match_header("authorization", "Bearer access-1")
        .with_body(VIRTUAL_CARD_JSON)
        .create_async()
        .await;

    let response = client.get_virtual_card("vc_1234").await.unwrap();

    assert_eq!(response.virtual_card.display_name, "Travel");
    assert!(response.virtual_card.is_active());
    get.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_transactions_query_omits_empty_filters() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let list = server
        .mock(
            "GET",
            Matcher::Regex(r"^/virtualcards/vc_1234/transactions".to_string()),
        )
        .match_query(Matcher::Exact("count=25&status=CLEARED".to_string()))
        .match_header("authorization", "Bearer access-1")
        .with_body(TRANSACTIONS_JSON)
        .create_async()
        .await;

    let query = TransactionQuery::new()
        .with_count(25)
        .with_before("")
        .with_after("")
        .with_status("CLEARED");
    let response = client
        .get_virtual_card_transactions("vc_1234", &query)
        .await
        .unwrap();

    assert_eq!(response.transactions.len(), 2);
    assert_eq!(response.transactions[0].settled_amount_cents(), 2450);
    list.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_transactions_query_drops_out_of_range_count() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let list = server
        .mock(
            "GET",
            Matcher::Regex(r"^/virtualcards/vc_1234/transactions".to_string()),
        )
        .match_query(Matcher::Exact("status=PENDING".to_string()))
        .with_body(r#"{"transactions":[]}"#)
        .expect(2)
        .create_async()
        .await;

    for count in [0, 501] {
        let query = TransactionQuery::new()
            .with_count(count)
            .with_status("PENDING");
        let response = client
            .get_virtual_card_transactions("vc_1234", &query)
            .await
            .unwrap();
        assert!(response.transactions.is_empty());
    }

    list.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_create_virtual_card_posts_body() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let create = server
        .mock("POST", "/virtualcards")
        .match_header("authorization", "Bearer access-1")
        .match_body(Matcher::PartialJson(json!({
            "creditCardId": "cc_1",
            "displayName": "Travel",
            "balanceCents": 50000,
            "currency": "USD"
        })))
        .with_status(201)
        .with_body(VIRTUAL_CARD_JSON)
        .create_async()
        .await;

    let request = CreateVirtualCardRequest {
        credit_card_id: "cc_1".to_string(),
        display_name: "Travel".to_string(),
        balance_cents: 50000,
        currency: "USD".to_string(),
        ..CreateVirtualCardRequest::default()
    };
    let response = client.create_virtual_card(&request).await.unwrap();

    assert_eq!(response.virtual_card.id, "vc_1234");
    create.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_update_virtual_card_puts_body() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let update = server
        .mock("PUT", "/virtualcards/vc_1234")
        .match_header("authorization", "Bearer access-1")
        .match_body(Matcher::PartialJson(json!({ "displayName": "Renamed" })))
        .with_body(VIRTUAL_CARD_JSON)
        .create_async()
        .await;

    let request = UpdateVirtualCardRequest {
        display_name: "Renamed".to_string(),
        ..UpdateVirtualCardRequest::default()
    };
    client
        .update_virtual_card("vc_1234", &request)
        .await
        .unwrap();

    update.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_cancel_and_reject_use_put_without_body() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let cancel = server
        .mock("PUT", "/virtualcards/vc_1234/cancel")
        .match_header("authorization", "Bearer access-1")
        .match_body("")
        .with_body(r#"{"virtualCard":{"id":"vc_1234","status":"CANCELLED"}}"#)
        .create_async()
        .await;
    let reject = server
        .mock("PUT", "/virtualcards/vc_5678/reject")
        .match_header("authorization", "Bearer access-1")
        .match_body("")
        .with_body(r#"{"virtualCard":{"id":"vc_5678","status":"REJECTED"}}"#)
        .create_async()
        .await;

    let cancelled = client.cancel_virtual_card("vc_1234").await.unwrap();
    let rejected = client.reject_virtual_card("vc_5678").await.unwrap();

    assert_eq!(cancelled.virtual_card.status, "CANCELLED");
    assert_eq!(rejected.virtual_card.status, "REJECTED");
    cancel.assert_async().await;
    reject.assert_async().await;
    client.shutdown().await;
}

#[tokio::test]
async fn test_error_status_is_decoded_like_success() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let _missing = server
        .mock("GET", "/virtualcards/vc_missing")
        .with_status(404)
        .with_body(r#"{"error":"Not Found","message":"virtual card not found"}"#)
        .create_async()
        .await;

    let response = client.get_virtual_card("vc_missing").await.unwrap();
    assert_eq!(response, VirtualCardResponse::default());
    client.shutdown().await;
}

#[tokio::test]
async fn test_malformed_response_is_a_json_error() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let _broken = server
        .mock("GET", "/virtualcards/vc_1234")
        .with_body(r#"{"virtualCard": "#)
        .create_async()
        .await;

    let result = client.get_virtual_card("vc_1234").await;
    assert!(matches!(result, Err(AppError::Json(_))));
    client.shutdown().await;
}

#[tokio::test]
async fn test_operations_fail_after_shutdown() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let get = server
        .mock("GET", "/virtualcards/vc_1234")
        .expect(0)
        .create_async()
        .await;

    client.shutdown().await;
    let result = client.get_virtual_card("vc_1234").await;

    assert!(matches!(result, Err(AppError::SessionClosed)));
    assert_eq!(client.current_token(), None);
    get.assert_async().await;
}

#[tokio::test]
async fn test_response_serializes_for_output() {
    let mut server = start_server().await;
    let (client, _signin) = signed_in_client(&mut server).await;
    let _signout = mock_signout(&mut server).await;
    let _get = server
        .mock("GET", "/virtualcards/vc_1234")
        .with_body(VIRTUAL_CARD_JSON)
        .create_async()
        .await;

    let response = client.get_virtual_card("vc_1234").await.unwrap();
    assert_json_include!(
        actual: serde_json::to_value(&response).unwrap(),
        expected: json!({
            "virtualCard": {
                "id": "vc_1234",
                "cardImage": { "textColorRGBA": "rgba(255,255,255,1)" },
                "validMccRanges": [{ "lowest": "3000", "highest": "3299" }]
            }
        })
    );
    client.shutdown().await;
}
