//! User Context - 用户限界上下文
//!
//! 用户只能新增（种子数据或 insert_user），不能修改

mod entities;
mod value_objects;

pub use entities::User;
pub use value_objects::{UserId, UserRole};
