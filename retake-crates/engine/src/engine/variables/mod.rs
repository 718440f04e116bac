mod domain_id;
mod literal;

pub use domain_id::DomainId;
pub use literal::Literal;
