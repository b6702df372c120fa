//! Wire-level types shared between the remote-play client glue and the
//! frontends that embed it. No transport or runtime dependencies live here.

pub mod domain;
pub mod protocol;
