pub mod administration;
pub mod cut_point;
pub mod norms;
pub mod response;
pub mod result;
pub mod scale;
