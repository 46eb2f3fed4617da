use assert_json_diff::assert_json_eq;
use extendz::model::requests::{
    CreateVirtualCardRequest, ForgotPasswordRequest, LoginRequest, LogoutRequest,
    RefreshTokenLoginRequest, UpdateVirtualCardRequest, VirtualCardPageableRequest,
};
use extendz::presentation::card::{MccRange, Recurrence, ReferenceField};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn login_request_uses_password_key() {
    let request = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "s3cret".to_string(),
    };
    assert_json_eq!(
        json_value(&request),
        json!({ "email": "ada@example.com", "password": "s3cret" })
    );
}

#[test]
fn token_requests_are_camel_case() {
    let renew = RefreshTokenLoginRequest {
        refresh_token: "refresh-1".to_string(),
    };
    assert_json_eq!(json_value(&renew), json!({ "refreshToken": "refresh-1" }));
    assert_json_eq!(
        json_value(&LogoutRequest::default()),
        json!({ "refreshToken": "" })
    );
}

#[test]
fn forgot_password_request_shape() {
    let request = ForgotPasswordRequest {
        email: "ada@example.com".to_string(),
    };
    assert_json_eq!(json_value(&request), json!({ "email": "ada@example.com" }));
}

#[test]
fn pageable_request_builders() {
    let request = VirtualCardPageableRequest::new()
        .with_page(25, 2)
        .with_status("ACTIVE")
        .with_search("travel");

    assert_eq!(request.count, 25);
    assert_eq!(request.page, 2);
    assert_eq!(request.status, "ACTIVE");
    assert_eq!(request.search, "travel");

    let value = json_value(&request);
    assert_eq!(value["count"], 25);
    assert_eq!(value["sortField"], request.sort_field.as_str());
    assert_eq!(value["pendingRequest"], false);
}

#[test]
fn create_request_survives_an_echo() {
    let request = CreateVirtualCardRequest {
        credit_card_id: "cc_1".to_string(),
        recipient: "ada@example.com".to_string(),
        display_name: "Travel".to_string(),
        reference_fields: vec![ReferenceField {
            field_label: "Project".to_string(),
            field_code: "P".to_string(),
            option_label: "Alpha".to_string(),
            option_code: "A".to_string(),
        }],
        balance_cents: 5000,
        currency: "USD".to_string(),
        valid_to: "2027-01-31T23:59:59Z".to_string(),
        recurs: true,
        recurrence: Recurrence {
            balance_cents: 5000,
            period: "MONTHLY".to_string(),
            interval: 1,
            terminator: "NONE".to_string(),
            ..Recurrence::default()
        },
        valid_mcc_ranges: vec![MccRange {
            lowest: "3000".to_string(),
            highest: "3299".to_string(),
        }],
        ..CreateVirtualCardRequest::default()
    };

    let echoed = serde_json::to_string(&request).unwrap();
    let decoded: CreateVirtualCardRequest = serde_json::from_str(&echoed).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn update_request_reads_partial_json() {
    let decoded: UpdateVirtualCardRequest =
        serde_json::from_str(r#"{"displayName":"Renamed","balanceCents":100}"#).unwrap();
    assert_eq!(decoded.display_name, "Renamed");
    assert_eq!(decoded.balance_cents, 100);
    assert!(decoded.credit_card_id.is_empty());
    assert!(decoded.valid_mcc_ranges.is_empty());
}
