use std::ops::Mul;

pub fn standalone_function(param: impl std::fmt::Display) -> String {
    format!("This is a standalone function: {}", param)
}

pub fn multiply<T: Mul<Output = T>>(x: T, y: T) -> T {
    x * y
}
