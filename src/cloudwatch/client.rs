// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::operation::get_metric_statistics::GetMetricStatisticsOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension,
    StandardUnit,
    Statistic,
};
use aws_types::region::Region;
use crate::common::{
    CredentialSource,
    TimeWindow,
    ONE_DAY,
};
use tracing::debug;

/// A `CloudWatch` `Client` scoped to one region.
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,

    /// Region this client was created in.
    pub region: String,
}

impl Client {
    /// Return a new `Client` for `region`, authenticated through
    /// `credentials`.
    pub async fn new(credentials: &CredentialSource, region: &str) -> Result<Self> {
        debug!("new: Creating CloudWatchClient in region '{}'", region);

        let config = credentials
            .sdk_config(Some(Region::new(region.to_string())))
            .await?;

        let client = CloudWatchClient::new(&config);

        Ok(Self {
            client,
            region: region.to_string(),
        })
    }

    /// Returns the `GetMetricStatisticsOutput` for one bucket and storage
    /// type over `window`.
    ///
    /// `BucketSizeBytes` is published once a day per storage type, so the
    /// period is a day and the statistic is the daily average.
    pub async fn get_metric_statistics(
        &self,
        bucket: &str,
        storage_type: &str,
        window: &TimeWindow,
    ) -> Result<GetMetricStatisticsOutput> {
        debug!(
            "get_metric_statistics: '{}' storage type '{}'",
            bucket,
            storage_type,
        );

        let period = i32::try_from(ONE_DAY.as_secs())
            .context("period")?;

        let dimensions = vec![
            Dimension::builder()
                .name("BucketName")
                .value(bucket)
                .build(),
            Dimension::builder()
                .name("StorageType")
                .value(storage_type)
                .build(),
        ];

        let output = self.client.get_metric_statistics()
            .namespace("AWS/S3")
            .metric_name("BucketSizeBytes")
            .set_dimensions(Some(dimensions))
            .start_time(DateTime::from(window.start))
            .end_time(DateTime::from(window.end))
            .period(period)
            .statistics(Statistic::Average)
            .unit(StandardUnit::Bytes)
            .send()
            .await?;

        Ok(output)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use aws_sdk_cloudwatch::config::{
        Config as CloudWatchConfig,
        Credentials,
        Region,
    };
    use aws_smithy_client::erase::DynConnector;
    use aws_smithy_client::test_connection::TestConnection;
    use aws_smithy_http::body::SdkBody;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use std::time::SystemTime;

    pub enum ResponseType<'a> {
        FromFile(&'a str),
        WithStatus(u16),
    }

    // Create a mock CloudWatch client replaying the given responses in
    // order.
    pub fn mock_client(responses: Vec<ResponseType<'_>>) -> Client {
        let events = responses
            .iter()
            .map(|r| {
                match r {
                    ResponseType::FromFile(file) => {
                        let path = Path::new("test-data").join(file);
                        let data = fs::read_to_string(path).unwrap();

                        (
                            http::Request::builder()
                                .body(SdkBody::from("request body"))
                                .unwrap(),

                            http::Response::builder()
                                .status(200)
                                .body(SdkBody::from(data))
                                .unwrap(),
                        )
                    },
                    ResponseType::WithStatus(status) => {
                        (
                            http::Request::builder()
                                .body(SdkBody::from("request body"))
                                .unwrap(),

                            http::Response::builder()
                                .status(*status)
                                .body(SdkBody::from(""))
                                .unwrap(),
                        )
                    },
                }
            })
            .collect();

        let conn = TestConnection::new(events);
        let conn = DynConnector::new(conn);

        let creds = Credentials::from_keys(
            "ATESTCLIENT",
            "atestsecretkey",
            Some("atestsessiontoken".to_string()),
        );

        let conf = CloudWatchConfig::builder()
            .credentials_provider(creds)
            .http_connector(conn)
            .region(Region::new("eu-west-1"))
            .build();

        let client = CloudWatchClient::from_conf(conf);

        Client {
            client,
            region: "eu-west-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_metric_statistics() {
        let client = mock_client(vec![
            ResponseType::FromFile("cloudwatch-get-metric-statistics.xml"),
        ]);

        let window = TimeWindow::recent(SystemTime::now());

        let ret = client.get_metric_statistics(
            "test-bucket",
            "StandardStorage",
            &window,
        ).await.unwrap();

        let datapoints = ret.datapoints().unwrap_or_default();

        assert_eq!(datapoints.len(), 1);
        assert_eq!(datapoints[0].average(), Some(123_456_789.0));
    }
}
