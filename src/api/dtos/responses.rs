use serde::Serialize;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<String>,
}

#[derive(Serialize)]
pub struct ArrivalOrderResponse {
    pub arrival_order: bool,
}

#[derive(Serialize)]
pub struct CustomerCheckResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
