//! Payment module - Role assignment, payment draws and pair payoff resolution.

mod errors;
mod resolver;
mod roles;
mod selection;

pub use errors::PaymentError;
pub use resolver::{
    resolve_payment, PairPayoff, PairSelections, PaymentResolver, PayoffComponent,
    RespondentPayoff,
};
pub use roles::{PairPosition, Role, RoleAssignment};
pub use selection::{draw_binding_position, PaymentSelection};
