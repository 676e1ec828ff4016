use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Repo {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "html_url")]
    pub html_url: String,

    #[serde(rename = "ssh_url")]
    pub ssh_url: String,

    #[serde(rename = "clone_url")]
    pub clone_url: String,
}
