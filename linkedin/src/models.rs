use serde::Serialize;

/// Body of a `POST /v2/ugcPosts` text share.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost<'a> {
    pub author: &'a str,
    pub lifecycle_state: &'static str,
    pub specific_content: SpecificContent<'a>,
    pub visibility: Visibility,
}

#[derive(Debug, Serialize)]
pub struct SpecificContent<'a> {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent<'a> {
    pub share_commentary: ShareCommentary<'a>,
    pub share_media_category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ShareCommentary<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: &'static str,
}

impl<'a> UgcPost<'a> {
    /// Published, public, text-only post.
    pub fn public_text(author: &'a str, text: &'a str) -> Self {
        Self {
            author,
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text },
                    share_media_category: "NONE",
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC",
            },
        }
    }
}

/// A post the API accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// URN of the new post, from the `x-restli-id` header.
    pub id: Option<String>,
}
