pub mod a001_promo_product;
pub mod a002_commercial_entity;
