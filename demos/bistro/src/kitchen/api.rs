pub fn cooks_on_shift() -> Vec<String> {
    super::prep::todays_cooks()
}
