//! Black-box checks against Yummly: the `is-registered` user lookup endpoint and the Seasonal
//! recipe listing.

pub mod is_registered;
pub mod seasonal;
