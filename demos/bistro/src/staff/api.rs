use super::rota;

pub fn get_kitchen_rota() -> Vec<String> {
    rota::kitchen_rota()
}
