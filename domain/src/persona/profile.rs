//! Creator profile and the keyword bypass it drives

/// Built-in creator name.
pub const DEFAULT_CREATOR_NAME: &str = "Ankit Nandoliya";

/// Built-in portfolio link.
pub const DEFAULT_CREATOR_PORTFOLIO: &str =
    "https://ankit52-git-main-ankitnandoliya32-8971s-projects.vercel.app/";

/// Built-in trigger phrases. Matching is a lower-cased substring test.
pub const DEFAULT_CREATOR_KEYWORDS: &[&str] = &[
    "who built you",
    "who made you",
    "your creator",
    "your developer",
    "who created you",
    "who is ankit",
    "tell me about ankit",
    "who is my master",
    "tell me about yourself",
];

/// Built-in biography, rendered as markdown.
pub const DEFAULT_CREATOR_PROFILE: &str = "
**Ankit Nandoliya** is a software developer focused on full-stack development and artificial intelligence integration. He creates smooth user experiences and stable, scalable backend systems.

**Key Expertise:**
* **Full Stack Development:** Experienced with modern JavaScript frameworks (like React or Angular) and Python/Node.js for backend services.
* **AI/ML Integration:** Works with generative models and APIs to build intelligent applications, like this J.A.R.V.I.S. system.
* **Cloud & Deployment:** Familiar with setting up applications using platforms like Vercel and similar cloud services.

He approaches projects with a focus on problem-solving and attention to detail.
";

/// Static description of who built the assistant.
///
/// Loaded once at startup and shared read-only. Questions matching one of
/// [`keywords`](Self::keywords) are answered from this profile instead of
/// the remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorProfile {
    name: String,
    portfolio_url: String,
    profile: String,
    keywords: Vec<String>,
}

impl CreatorProfile {
    pub fn new(
        name: impl Into<String>,
        portfolio_url: impl Into<String>,
        profile: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            portfolio_url: portfolio_url.into(),
            profile: profile.into(),
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn portfolio_url(&self) -> &str {
        &self.portfolio_url
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns `true` if `input` contains any trigger phrase, ignoring case.
    ///
    /// This is a plain substring test, so "who is ankita" also matches
    /// "who is ankit".
    pub fn matches(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// The fixed answer given instead of calling the provider.
    pub fn response_text(&self) -> String {
        format!(
            "I was built by the developer, **{name}**. \
             \n\n--- **Creator Profile and History** ---\n\n\
             {profile}\
             \n\nFor more details on his projects and technical background, \
             please visit his portfolio here: **[{url}]({url})**",
            name = self.name,
            profile = self.profile,
            url = self.portfolio_url,
        )
    }
}

impl Default for CreatorProfile {
    fn default() -> Self {
        Self::new(
            DEFAULT_CREATOR_NAME,
            DEFAULT_CREATOR_PORTFOLIO,
            DEFAULT_CREATOR_PROFILE,
            DEFAULT_CREATOR_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        )
    }
}
