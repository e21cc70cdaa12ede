use pedidos::domain::{HeaderField, HeaderInfo};

#[test]
fn given_empty_info_when_setting_field_then_stores_value() {
    let mut info = HeaderInfo::default();

    assert!(info.set_once(HeaderField::OrderNumber, "4521".to_string()));
    assert_eq!(info.get(HeaderField::OrderNumber), Some("4521"));
}

#[test]
fn given_field_already_set_when_setting_again_then_keeps_first_value() {
    let mut info = HeaderInfo::default();
    info.set_once(HeaderField::Date, "03/11/2024".to_string());

    assert!(!info.set_once(HeaderField::Date, "04/11/2024".to_string()));
    assert_eq!(info.date.as_deref(), Some("03/11/2024"));
}

#[test]
fn given_partial_info_when_serializing_then_uses_spanish_keys_and_omits_missing() {
    let info = HeaderInfo {
        order_number: Some("4521".to_string()),
        client: Some("Ferretería García".to_string()),
        ..HeaderInfo::default()
    };

    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "numero_pedido": "4521", "cliente": "Ferretería García" })
    );
}

#[test]
fn given_default_info_when_checking_then_is_empty() {
    assert!(HeaderInfo::default().is_empty());
}
