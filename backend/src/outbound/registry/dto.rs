//! DTOs for decoding Eureka `apps/{name}` responses.

use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub(super) struct ApplicationEnvelopeDto {
    pub(super) application: ApplicationDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApplicationDto {
    #[serde(default)]
    pub(super) instance: InstancesDto,
}

/// Eureka collapses single-element arrays into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum InstancesDto {
    Many(Vec<InstanceDto>),
    One(InstanceDto),
}

impl Default for InstancesDto {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InstanceDto {
    #[serde(default)]
    pub(super) status: String,
    pub(super) home_page_url: Option<String>,
    pub(super) host_name: Option<String>,
    pub(super) port: Option<PortDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PortDto {
    #[serde(rename = "$")]
    pub(super) number: u16,
}

impl ApplicationEnvelopeDto {
    /// Base URLs of the instances reporting `UP`, in registry order.
    pub(super) fn into_up_instances(self) -> Vec<Url> {
        let instances = match self.application.instance {
            InstancesDto::Many(instances) => instances,
            InstancesDto::One(instance) => vec![instance],
        };
        instances
            .into_iter()
            .filter(|instance| instance.status.eq_ignore_ascii_case("UP"))
            .filter_map(InstanceDto::into_base_url)
            .collect()
    }
}

impl InstanceDto {
    fn into_base_url(self) -> Option<Url> {
        if let Some(url) = self
            .home_page_url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
        {
            return Some(url);
        }
        let host = self.host_name?;
        let port = self.port.map_or(80, |port| port.number);
        Url::parse(&format!("http://{host}:{port}/")).ok()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn decode(value: serde_json::Value) -> Vec<String> {
        let dto: ApplicationEnvelopeDto = serde_json::from_value(value).expect("decode");
        dto.into_up_instances()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[rstest]
    fn keeps_only_up_instances() {
        let urls = decode(json!({
            "application": {
                "name": "REVIEW-SERVICE",
                "instance": [
                    { "status": "UP", "homePageUrl": "http://a.local:8081/" },
                    { "status": "DOWN", "homePageUrl": "http://b.local:8081/" },
                    { "status": "OUT_OF_SERVICE", "homePageUrl": "http://c.local:8081/" },
                    { "status": "UP", "homePageUrl": "http://d.local:8081/" }
                ]
            }
        }));
        assert_eq!(urls, vec!["http://a.local:8081/", "http://d.local:8081/"]);
    }

    #[rstest]
    fn accepts_single_instance_object() {
        let urls = decode(json!({
            "application": {
                "instance": { "status": "UP", "homePageUrl": "http://a.local/" }
            }
        }));
        assert_eq!(urls, vec!["http://a.local/"]);
    }

    #[rstest]
    fn falls_back_to_host_and_port() {
        let urls = decode(json!({
            "application": {
                "instance": [
                    { "status": "UP", "hostName": "reviews", "port": { "$": 9000, "@enabled": "true" } }
                ]
            }
        }));
        assert_eq!(urls, vec!["http://reviews:9000/"]);
    }
}
