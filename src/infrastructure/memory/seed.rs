//! 演示数据
//!
//! 两个用户（作者与读者）、两本小说以及一组带子章节的章节

use chrono::{DateTime, Duration, Utc};

use crate::domain::novel::{
    Chapter, ChapterFields, ChapterId, Novel, NovelError, NovelId, NovelProfile, NovelStatus, Title,
};
use crate::domain::user::{User, UserId, UserRole};

/// 存储初始内容
#[derive(Debug, Clone, Default)]
pub struct LibrarySeed {
    pub users: Vec<User>,
    pub novels: Vec<Novel>,
    /// 按插入顺序排列
    pub chapters: Vec<Chapter>,
}

impl LibrarySeed {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }
}

fn millis_ago(now: DateTime<Utc>, millis: i64) -> DateTime<Utc> {
    now - Duration::milliseconds(millis)
}

fn chapter(
    id: &str,
    novel_id: &str,
    parent_id: Option<&str>,
    title: &str,
    content: &str,
    order_index: i32,
    created_at: DateTime<Utc>,
) -> Result<Chapter, NovelError> {
    let fields = ChapterFields {
        parent_id: parent_id.map(ChapterId::from),
        title: Title::new(title)?,
        content: content.to_string(),
        order_index,
        is_published: true,
    };
    Ok(Chapter::restore(
        ChapterId::from(id),
        NovelId::from(novel_id),
        fields,
        created_at,
        created_at,
    ))
}

const IGNITION: &str = "The engine hummed with a vibration that rattled Kael's teeth. It wasn't the \
clean, synthetic purr of modern craft; this was the growl of something old, something illegal.

\"Systems check,\" he muttered, flipping toggles that felt satisfyingly mechanical.

The display flickered to life, bathing the cockpit in an amber glow. Outside, the hangar bay was \
dark, the only light coming from the distant stars visible through the force field. He took a deep \
breath. This was it. The moment he'd been planning for three years.

He pushed the throttle forward. The ship lurched, not smoothly, but with the eagerness of a \
chained beast released.";

const THE_VOID: &str = "Silence. Absolute silence. That was the first thing they taught you about \
space, but experiencing it was different. Even the ship seemed to hold its breath.

Kael floated in zero-G, looking out the viewport. The nebula ahead was a bruise on the face of \
the universe, purple and black.";

const THE_SIGNAL: &str = "A blip on the radar. Small, rhythmic. It shouldn't be there. No one came \
this far out into the Rim.

Kael adjusted the frequency scanner. \"Hello?\" he whispered into the comms, breaking the one law \
that mattered.";

/// 内置演示数据
pub fn demo_library() -> Result<LibrarySeed, NovelError> {
    let now = Utc::now();
    let author = UserId::from("u1");

    let users = vec![
        User::new(author.clone(), "DemoAuthor", "author@novella.com", UserRole::Author)
            .with_avatar("https://picsum.photos/id/1005/200/200")
            .with_bio("Writes sci-fi and fantasy."),
        User::new(UserId::from("u2"), "BookWorm", "reader@novella.com", UserRole::Reader)
            .with_avatar("https://picsum.photos/id/1011/200/200"),
    ];

    let novels = vec![
        Novel::restore(
            NovelId::from("n1"),
            author.clone(),
            NovelProfile {
                title: Title::new("The Last Starship")?,
                description: "In a galaxy where silence is the only law, one pilot dares to turn \
                              on the radio."
                    .to_string(),
                genre: "Sci-Fi".to_string(),
                status: NovelStatus::Ongoing,
                cover_url: "https://picsum.photos/id/452/600/900".to_string(),
            },
            millis_ago(now, 10_000_000),
            now,
        ),
        Novel::restore(
            NovelId::from("n2"),
            author,
            NovelProfile {
                title: Title::new("Echoes of the Forest")?,
                description: "The trees whisper secrets of the past, but only the lost can hear \
                              them."
                    .to_string(),
                genre: "Fantasy".to_string(),
                status: NovelStatus::Completed,
                cover_url: "https://picsum.photos/id/1044/600/900".to_string(),
            },
            millis_ago(now, 50_000_000),
            millis_ago(now, 1_000_000),
        ),
    ];

    let chapters = vec![
        chapter(
            "c1",
            "n1",
            None,
            "Chapter 1: Ignition",
            IGNITION,
            0,
            millis_ago(now, 10_000_000),
        )?,
        chapter(
            "c2",
            "n1",
            None,
            "Chapter 2: The Void",
            THE_VOID,
            1,
            millis_ago(now, 9_000_000),
        )?,
        chapter(
            "c2-1",
            "n1",
            Some("c2"),
            "Part A: The Signal",
            THE_SIGNAL,
            0,
            millis_ago(now, 8_500_000),
        )?,
    ];

    Ok(LibrarySeed {
        users,
        novels,
        chapters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_library_shape() {
        let seed = demo_library().unwrap();
        assert_eq!(seed.users.len(), 2);
        assert_eq!(seed.novels.len(), 2);
        assert_eq!(seed.chapters.len(), 3);

        let child = seed.chapters.iter().find(|c| c.id().as_str() == "c2-1").unwrap();
        assert_eq!(child.parent_id(), Some(&ChapterId::from("c2")));
        assert!(seed.novels.iter().all(|n| n.updated_at() >= n.created_at()));
        assert_eq!(seed.chapters[2].title().as_str(), "Part A: The Signal");
        assert!(seed.chapters[0].content().starts_with("The engine hummed"));
    }
}
