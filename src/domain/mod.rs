// 領域層：資料模型與能力介面 (ports)

pub mod model;
pub mod ports;
