use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::geo::GeoError;
use crate::impl_err;
use crate::path::PathError;
use crate::predict::PredictError;
#[cfg(feature = "http_server")]
use crate::server::ServerError;

#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Path(PathError),
    Config(ConfigError),
    Feed(FeedError),
    Predict(PredictError),
    #[cfg(feature = "http_server")]
    Server(ServerError),
    Io(std::io::Error),
    /// The tracing subscriber could not be installed.
    Trace(String),
}

impl_err!(GeoError, Geo);
impl_err!(PathError, Path);
impl_err!(ConfigError, Config);
impl_err!(FeedError, Feed);
impl_err!(PredictError, Predict);
#[cfg(feature = "http_server")]
impl_err!(ServerError, Server);
impl_err!(std::io::Error, Io);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Path(err) => write!(f, "{err}"),
            Error::Config(err) => write!(f, "{err}"),
            Error::Feed(err) => write!(f, "{err}"),
            Error::Predict(err) => write!(f, "{err}"),
            #[cfg(feature = "http_server")]
            Error::Server(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "{err}"),
            Error::Trace(reason) => write!(f, "could not initialise tracing: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
