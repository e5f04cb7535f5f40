/// Load, edit, and write command.
pub mod edit;
/// Stack listing and hierarchy printing.
pub mod inspect;
pub(crate) mod util;
