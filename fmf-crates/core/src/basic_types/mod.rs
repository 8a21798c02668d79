mod fmf_error;
mod trail;

pub use fmf_error::FmfError;
pub(crate) use trail::Trail;
