pub struct Shift {
    pub cook: String,
}

impl Shift {
    pub const LENGTH_HOURS: u8 = 8;
}

pub(crate) fn kitchen_rota() -> Vec<String> {
    vec!["A".to_string(), "B".to_string()]
}
