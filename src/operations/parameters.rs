//! Parameter reads, writes and deletes.

use serde_json::{json, Value};
use tracing::warn;

use crate::options::{
    DescribeParametersOptions, GetParameterHistoryOptions, GetParameterOptions,
    GetParametersByPathOptions, GetParametersOptions, LabelParameterVersionOptions,
    PutParameterOptions,
};
use crate::protocol::{Action, RequestDescriptor};
use crate::types::{IntoParameterType, ParameterFilter};
use crate::Result;

use super::{add_pagination, maybe_add, object, string_list, RequestBuilder};

fn filter_list(filters: &[ParameterFilter]) -> Value {
    Value::Array(filters.iter().map(ParameterFilter::to_wire).collect())
}

impl RequestBuilder {
    pub fn get_parameter(&self, name: &str, options: &GetParameterOptions) -> RequestDescriptor {
        let payload = object(json!({
            "Name": name,
            "WithDecryption": options.with_decryption,
        }));
        self.descriptor(Action::GetParameter, payload)
    }

    pub fn get_parameters<S: AsRef<str>>(
        &self,
        names: &[S],
        options: &GetParametersOptions,
    ) -> RequestDescriptor {
        let payload = object(json!({
            "Names": string_list(names),
            "WithDecryption": options.with_decryption,
        }));
        self.descriptor(Action::GetParameters, payload)
    }

    /// `ParameterFilters` is omitted entirely unless filters were supplied.
    pub fn get_parameters_by_path(
        &self,
        path: &str,
        options: &GetParametersByPathOptions,
    ) -> RequestDescriptor {
        let mut payload = object(json!({
            "Path": path,
            "Recursive": options.recursive,
            "WithDecryption": options.with_decryption,
        }));
        maybe_add(
            &mut payload,
            "ParameterFilters",
            options.parameter_filters.as_deref().map(filter_list),
        );
        add_pagination(
            &mut payload,
            options.max_results,
            options.next_token.as_deref(),
        );
        self.descriptor(Action::GetParametersByPath, payload)
    }

    /// Rejects a type outside the closed set before building anything.
    pub fn put_parameter<T: IntoParameterType>(
        &self,
        name: &str,
        parameter_type: T,
        value: &str,
        options: &PutParameterOptions,
    ) -> Result<RequestDescriptor> {
        let parameter_type = parameter_type.into_parameter_type().map_err(|e| {
            warn!(parameter = name, error = %e, "rejected put_parameter");
            e
        })?;

        let mut payload = object(json!({
            "Name": name,
            "Overwrite": options.overwrite,
            "Value": value,
            "Type": parameter_type.wire_name(),
            "Description": options.description,
        }));
        maybe_add(&mut payload, "KeyId", options.key_id.as_deref());
        maybe_add(
            &mut payload,
            "AllowedPattern",
            options.allowed_pattern.as_deref(),
        );
        Ok(self.descriptor(Action::PutParameter, payload))
    }

    pub fn delete_parameter(&self, name: &str) -> RequestDescriptor {
        self.descriptor(Action::DeleteParameter, object(json!({ "Name": name })))
    }

    pub fn delete_parameters<S: AsRef<str>>(&self, names: &[S]) -> RequestDescriptor {
        self.descriptor(
            Action::DeleteParameters,
            object(json!({ "Names": string_list(names) })),
        )
    }

    pub fn get_parameter_history(
        &self,
        name: &str,
        options: &GetParameterHistoryOptions,
    ) -> RequestDescriptor {
        let mut payload = object(json!({
            "Name": name,
            "WithDecryption": options.with_decryption,
        }));
        add_pagination(
            &mut payload,
            options.max_results,
            options.next_token.as_deref(),
        );
        self.descriptor(Action::GetParameterHistory, payload)
    }

    pub fn describe_parameters(&self, options: &DescribeParametersOptions) -> RequestDescriptor {
        let mut payload = serde_json::Map::new();
        maybe_add(
            &mut payload,
            "ParameterFilters",
            options.parameter_filters.as_deref().map(filter_list),
        );
        add_pagination(
            &mut payload,
            options.max_results,
            options.next_token.as_deref(),
        );
        self.descriptor(Action::DescribeParameters, payload)
    }

    pub fn label_parameter_version<S: AsRef<str>>(
        &self,
        name: &str,
        labels: &[S],
        options: &LabelParameterVersionOptions,
    ) -> RequestDescriptor {
        let mut payload = object(json!({
            "Name": name,
            "Labels": string_list(labels),
        }));
        maybe_add(&mut payload, "ParameterVersion", options.parameter_version);
        self.descriptor(Action::LabelParameterVersion, payload)
    }
}
