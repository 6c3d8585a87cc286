use crate::staff::api;
use crate::staff::rota::Shift;

pub fn todays_cooks() -> Vec<String> {
    api::get_kitchen_rota()
}

pub fn next_shift() -> Option<Shift> {
    None
}

pub fn capacity() -> usize {
    24
}
