use shared::models::DashboardIndicator;
use shared::response::{ApiResponse, DateRange};

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct IndicatorApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> IndicatorApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Revenue, guest and dish figures for the owner dashboard
    pub async fn dashboard(&self, range: DateRange) -> ClientResult<DashboardIndicator> {
        let resp: ApiResponse<DashboardIndicator> =
            self.http.get_query("indicators/dashboard", &range).await?;
        into_data(resp, "dashboard indicators")
    }
}
