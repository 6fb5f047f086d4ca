mod ge_erd_entity;

pub use ge_erd_entity::GeErdEntity;
