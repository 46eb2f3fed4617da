use extendz::model::responses::{
    LoginSignUpResponse, SimpleResponse, TransactionsResponse, VirtualCardResponse,
    VirtualCardsResponse,
};

#[test]
fn signin_response_from_fixture() {
    let response: LoginSignUpResponse =
        serde_json::from_str(include_str!("../../testdata/signin.json")).unwrap();

    assert_eq!(response.token, "access-1");
    assert_eq!(response.refresh_token, "refresh-1");
    assert_eq!(response.user.first_name, "Ada");
    assert_eq!(response.user.issuer_sanctions.len(), 1);
    assert_eq!(response.user.issuer_sanctions[0].status, "APPROVED");
    // Fields missing from the payload fall back to defaults
    assert!(response.user.phone.is_empty());
}

#[test]
fn virtual_cards_response_from_fixture() {
    let response: VirtualCardsResponse =
        serde_json::from_str(include_str!("../../testdata/virtual_cards.json")).unwrap();

    assert_eq!(response.pagination.total_items, 2);
    assert_eq!(response.pagination.number_of_pages, 1);
    assert_eq!(response.virtual_cards.len(), 2);
    assert!(response.virtual_cards[0].is_active());
    assert!(!response.virtual_cards[1].is_active());
}

#[test]
fn virtual_card_response_round_trip() {
    let response: VirtualCardResponse =
        serde_json::from_str(include_str!("../../testdata/virtual_card.json")).unwrap();
    let encoded = serde_json::to_string(&response).unwrap();
    let decoded: VirtualCardResponse = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn transactions_response_from_fixture() {
    let response: TransactionsResponse =
        serde_json::from_str(include_str!("../../testdata/transactions.json")).unwrap();
    assert_eq!(response.transactions.len(), 2);
    assert_eq!(response.transactions[1].decline_reasons[0].code, "INSUFFICIENT_FUNDS");
}

#[test]
fn empty_object_decodes_to_defaults() {
    let response: SimpleResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response, SimpleResponse::default());

    let response: VirtualCardsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.virtual_cards.is_empty());
}

#[test]
fn error_payload_decodes_without_failing() {
    // The API reports errors in a body that still decodes into the target shape
    let response: VirtualCardResponse =
        serde_json::from_str(r#"{"error":"Not Found","message":"no such card"}"#).unwrap();
    assert!(response.virtual_card.id.is_empty());
}
