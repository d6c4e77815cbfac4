use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ContactError, ParseIdError, ParseKindError, PortfolioDraftError, ScoreError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    ParseKind(#[from] ParseKindError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    PortfolioDraft(#[from] PortfolioDraftError),
}
