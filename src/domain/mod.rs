//! Доменная модель трекера фишек: фишки, игроки, стол, улицы, блайнды, серии.
//!
//! Здесь только данные и простые вычисления над ними; переходы состояний
//! живут в `engine`.

pub mod blinds;
pub mod chips;
pub mod hand;
pub mod player;
pub mod series;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use blinds::*;
pub use chips::*;
pub use hand::*;
pub use player::*;
pub use series::*;
pub use table::*;
