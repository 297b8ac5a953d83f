use super::*;

mod line_test;

fn encode(s: &str) -> Vec<u8> {
    Line::new(s).unwrap().unwrap().encode().unwrap()
}
