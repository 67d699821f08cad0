//! Robots.txt rule evaluation
//!
//! Wraps the robotstxt crate behind a small policy type with an explicit
//! allow-everything variant used whenever a robots.txt file cannot be
//! fetched or parsed.

use robotstxt::DefaultMatcher;

/// Per-origin robots.txt ruleset
///
/// `rules` holds the raw robots.txt body. `None` means no usable rules exist
/// for the origin and every URL is allowed (the fail-open default).
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    rules: Option<String>,
}

impl RobotsPolicy {
    /// Creates a policy from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Self::allow_all();
        }
        Self {
            rules: Some(content.to_string()),
        }
    }

    /// Creates the permissive policy used when robots.txt is unavailable
    pub fn allow_all() -> Self {
        Self { rules: None }
    }

    /// Returns true if this policy permits everything
    pub fn is_permissive(&self) -> bool {
        self.rules.is_none()
    }

    /// Checks whether a URL is allowed for the given user agent
    ///
    /// Unparseable content degrades to allow-all inside the matcher, so this
    /// never fails.
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        let Some(rules) = &self.rules else {
            return true;
        };

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(rules, user_agent, url)
    }

    /// Extracts the `Crawl-delay` directive for a user agent, in seconds
    ///
    /// The directive is non-standard but widely published; a group naming the
    /// agent specifically takes precedence over the `*` wildcard group.
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        let rules = self.rules.as_deref()?;
        let wanted = user_agent.to_lowercase();

        let mut group_agents: Vec<String> = Vec::new();
        let mut in_directives = false;
        let mut wildcard_delay: Option<f64> = None;
        let mut agent_delay: Option<f64> = None;

        for line in rules.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "user-agent" => {
                    // A User-agent line after other directives starts a new group
                    if in_directives {
                        group_agents.clear();
                        in_directives = false;
                    }
                    group_agents.push(value.to_lowercase());
                }
                "crawl-delay" => {
                    in_directives = true;
                    let Ok(delay) = value.parse::<f64>() else {
                        continue;
                    };
                    if group_agents.iter().any(|a| a == "*") {
                        wildcard_delay = Some(delay);
                    }
                    if group_agents.iter().any(|a| a != "*" && wanted.contains(a.as_str())) {
                        agent_delay = Some(delay);
                    }
                }
                _ => {
                    in_directives = true;
                }
            }
        }

        agent_delay.or(wildcard_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let policy = RobotsPolicy::allow_all();
        assert!(policy.is_permissive());
        assert!(policy.is_allowed("https://example.edu/any/path", "TestBot"));
        assert!(policy.is_allowed("https://example.edu/admin", "TestBot"));
    }

    #[test]
    fn test_disallow_all() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /");
        assert!(!policy.is_allowed("https://example.edu/", "TestBot"));
        assert!(!policy.is_allowed("https://example.edu/courses", "TestBot"));
    }

    #[test]
    fn test_disallow_specific_path() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /admin");
        assert!(policy.is_allowed("https://example.edu/", "TestBot"));
        assert!(policy.is_allowed("https://example.edu/courses", "TestBot"));
        assert!(!policy.is_allowed("https://example.edu/admin", "TestBot"));
        assert!(!policy.is_allowed("https://example.edu/admin/users", "TestBot"));
    }

    #[test]
    fn test_specific_user_agent_group() {
        let policy =
            RobotsPolicy::from_content("User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nAllow: /");
        assert!(policy.is_allowed("https://example.edu/page", "GoodBot"));
        assert!(!policy.is_allowed("https://example.edu/page", "BadBot"));
    }

    #[test]
    fn test_unparseable_content_fails_open() {
        let policy = RobotsPolicy::from_content("this is not valid robots.txt {{{");
        assert!(policy.is_allowed("https://example.edu/any", "TestBot"));
    }

    #[test]
    fn test_empty_content_is_permissive() {
        let policy = RobotsPolicy::from_content("   \n  ");
        assert!(policy.is_permissive());
    }

    #[test]
    fn test_crawl_delay_wildcard() {
        let policy = RobotsPolicy::from_content("User-agent: *\nCrawl-delay: 10\nDisallow: /admin");
        assert_eq!(policy.crawl_delay("TestBot"), Some(10.0));
        assert_eq!(policy.crawl_delay("AnyBot"), Some(10.0));
    }

    #[test]
    fn test_crawl_delay_prefers_specific_agent() {
        let policy = RobotsPolicy::from_content(
            "User-agent: TestBot\nCrawl-delay: 5\n\nUser-agent: *\nCrawl-delay: 10",
        );
        assert_eq!(policy.crawl_delay("TestBot"), Some(5.0));
        assert_eq!(policy.crawl_delay("OtherBot"), Some(10.0));
    }

    #[test]
    fn test_crawl_delay_absent() {
        let policy = RobotsPolicy::from_content("User-agent: *\nDisallow: /admin");
        assert_eq!(policy.crawl_delay("TestBot"), None);
        assert_eq!(RobotsPolicy::allow_all().crawl_delay("TestBot"), None);
    }

    #[test]
    fn test_crawl_delay_decimal() {
        let policy = RobotsPolicy::from_content("User-agent: *\nCrawl-delay: 2.5");
        assert_eq!(policy.crawl_delay("TestBot"), Some(2.5));
    }

    #[test]
    fn test_crawl_delay_case_insensitive() {
        let policy = RobotsPolicy::from_content("User-agent: TestBot\ncrawl-delay: 7");
        assert_eq!(policy.crawl_delay("testbot"), Some(7.0));
        assert_eq!(policy.crawl_delay("TESTBOT"), Some(7.0));
    }

    #[test]
    fn test_crawl_delay_shared_group() {
        let policy = RobotsPolicy::from_content("User-agent: BotA\nUser-agent: BotB\nCrawl-delay: 3");
        assert_eq!(policy.crawl_delay("BotA"), Some(3.0));
        assert_eq!(policy.crawl_delay("BotB"), Some(3.0));
        assert_eq!(policy.crawl_delay("BotC"), None);
    }
}
