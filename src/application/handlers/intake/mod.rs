//! Intake handlers (client side).

mod submit_intake;

pub use submit_intake::{
    PersistenceTask, SubmitError, SubmitIntakeCommand, SubmitIntakeHandler, SubmitIntakeResult,
};
