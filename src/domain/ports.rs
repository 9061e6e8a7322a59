use crate::utils::error::Result;

/// 可以自我介紹的實體
pub trait Greeter {
    fn greeting(&self) -> String;
}

/// 日誌能力，組合進需要記錄的實體
pub trait Loggable {
    fn log(&mut self, message: &str) -> Result<()>;
}
