pub fn can_seat(guests: usize) -> bool {
    guests <= super::covers_available()
}
