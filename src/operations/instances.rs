//! Managed instance queries.

use serde_json::{json, Value};

use crate::options::DescribeInstanceInformationOptions;
use crate::protocol::{Action, RequestDescriptor};
use crate::types::InstanceInformationFilter;

use super::{add_pagination, object, RequestBuilder};

impl RequestBuilder {
    /// `Filters` is always present; an empty list when none were given.
    pub fn describe_instance_information(
        &self,
        options: &DescribeInstanceInformationOptions,
    ) -> RequestDescriptor {
        let filters: Vec<Value> = options
            .filters
            .iter()
            .map(InstanceInformationFilter::to_wire)
            .collect();
        let mut payload = object(json!({ "Filters": filters }));
        add_pagination(
            &mut payload,
            options.max_results,
            options.next_token.as_deref(),
        );
        self.descriptor(Action::DescribeInstanceInformation, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_present_and_empty() {
        let req = RequestBuilder::default()
            .describe_instance_information(&DescribeInstanceInformationOptions::default());
        assert_eq!(req.body(), json!({"Filters": []}));
        assert_eq!(req.target(), Some("AmazonSSM.DescribeInstanceInformation"));
    }

    #[test]
    fn test_filters_and_pagination() {
        let opts = DescribeInstanceInformationOptions::new()
            .filter(InstanceInformationFilter::new("PingStatus", ["Online"]))
            .max_results(50)
            .next_token("n1");
        let req = RequestBuilder::default().describe_instance_information(&opts);
        assert_eq!(
            req.body(),
            json!({
                "Filters": [{"Key": "PingStatus", "Values": ["Online"]}],
                "MaxResults": 50,
                "NextToken": "n1",
            })
        );
    }
}
