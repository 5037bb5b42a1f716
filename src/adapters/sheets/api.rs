//! Remote Sheets API abstraction
//!
//! [`SheetsApi`] is the seam between the caching client and the network. The
//! production implementation is [`super::GoogleSheetsApi`]; tests substitute
//! in-memory fakes.

use crate::domain::{RawGrid, SheetCoordinates, SheetInfo, SheetsResult};
use async_trait::async_trait;

/// Authenticated, read-only access to one Sheets backend
#[async_trait]
pub trait SheetsApi: Send + Sync {
    /// Reads the cell values at `coordinates`
    ///
    /// Rows may be ragged. A range with no data yields an empty grid.
    ///
    /// # Errors
    ///
    /// `RemoteFetchFailed` for transport and non-success responses,
    /// `InvalidResponse` for bodies that cannot be decoded.
    async fn get_values(&self, coordinates: &SheetCoordinates) -> SheetsResult<RawGrid>;

    /// Lists the sheets of a spreadsheet in spreadsheet order
    async fn get_sheets(&self, spreadsheet_id: &str) -> SheetsResult<Vec<SheetInfo>>;
}
