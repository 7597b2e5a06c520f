//! Wire format of the trivia provider's two read endpoints: the category
//! listing and the per-category clue set. Records keep only the fields the
//! game consumes; serde skips the rest of the provider's payload.

use serde::{Deserialize, Serialize};

/// One entry of the category listing endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStub {
    pub id: u64,
}

/// Full category payload with its clue set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub title: String,
    pub clues: Vec<ClueEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_listing_decodes_with_extra_fields() {
        let payload = r#"[
            {"id": 11496, "title": "nature", "clues_count": 10},
            {"id": 4514, "title": "history", "clues_count": 5}
        ]"#;

        let stubs: Vec<CategoryStub> = serde_json::from_str(payload).unwrap();

        assert_eq!(stubs, vec![CategoryStub { id: 11496 }, CategoryStub { id: 4514 }]);
    }

    #[test]
    fn category_detail_decodes_with_extra_fields() {
        let payload = r#"{
            "id": 4514,
            "title": "history",
            "clues_count": 2,
            "clues": [
                {
                    "id": 33763,
                    "question": "First president of the USA",
                    "answer": "George Washington",
                    "value": 100,
                    "airdate": "1997-11-25T12:00:00.000Z",
                    "invalid_count": null
                },
                {
                    "id": 33769,
                    "question": "War fought between 1914 and 1918",
                    "answer": "<i>World War I</i>",
                    "value": 200
                }
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(payload).unwrap();

        assert_eq!(detail.id, 4514);
        assert_eq!(detail.title, "history");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].answer, "George Washington");
        assert_eq!(detail.clues[1].answer, "<i>World War I</i>");
    }

    #[test]
    fn listing_entry_without_id_is_rejected() {
        let payload = r#"[{"title": "nameless"}]"#;

        assert!(serde_json::from_str::<Vec<CategoryStub>>(payload).is_err());
    }

    #[test]
    fn detail_without_clues_is_rejected() {
        let payload = r#"{"id": 1, "title": "empty"}"#;

        assert!(serde_json::from_str::<CategoryDetail>(payload).is_err());
    }
}
