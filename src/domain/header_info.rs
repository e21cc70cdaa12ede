use serde::Serialize;

/// Order metadata found above the product table. Every field is write-once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    #[serde(rename = "numero_pedido", skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "cliente", skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    OrderNumber,
    Date,
    Client,
    Address,
}

impl HeaderInfo {
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        match field {
            HeaderField::OrderNumber => self.order_number.as_deref(),
            HeaderField::Date => self.date.as_deref(),
            HeaderField::Client => self.client.as_deref(),
            HeaderField::Address => self.address.as_deref(),
        }
    }

    pub fn is_set(&self, field: HeaderField) -> bool {
        self.get(field).is_some()
    }

    pub fn set_once(&mut self, field: HeaderField, value: String) -> bool {
        let slot = match field {
            HeaderField::OrderNumber => &mut self.order_number,
            HeaderField::Date => &mut self.date,
            HeaderField::Client => &mut self.client,
            HeaderField::Address => &mut self.address,
        };

        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.order_number.is_none()
            && self.date.is_none()
            && self.client.is_none()
            && self.address.is_none()
    }
}
