//! LibraryService - 应用层门面
//!
//! 外部调用方（HTTP 层等）唯一使用的接口。
//! 每个方法委托给对应的命令/查询处理器，存储本身不对外暴露。

use std::sync::Arc;

use crate::application::commands::handlers::{
    ContinueDraftHandler, CreateNovelHandler, DeleteChapterHandler, GenerateSynopsisHandler,
    LoginHandler, LoginResponse, LogoutHandler, SaveChapterHandler, SummarizeChapterHandler,
    UpdateNovelHandler,
};
use crate::application::commands::{
    ContinueDraft, CreateNovel, DeleteChapter, GenerateSynopsis, Login, Logout, SaveChapter,
    SummarizeChapter, UpdateNovel,
};
use crate::application::draft::ChapterDraft;
use crate::application::error::ApplicationError;
use crate::application::ports::{LibraryStorePort, SessionManagerPort, TextGenerationPort};
use crate::application::queries::handlers::{
    GetChapterHandler, GetChapterNeighborsHandler, GetChapterTreeHandler, GetNovelHandler,
    GetSessionUserHandler, GetUserHandler, ListChaptersHandler, ListNovelsByAuthorHandler,
    ListNovelsHandler,
};
use crate::application::queries::{
    GetChapter, GetChapterNeighbors, GetChapterTree, GetNovel, GetSessionUser, GetUser,
    ListChapters, ListNovels, ListNovelsByAuthor,
};
use crate::domain::novel::{Chapter, ChapterId, Novel};
use crate::domain::user::User;
use crate::domain::{ChapterNeighbors, ChapterTree};

type Result<T> = std::result::Result<T, ApplicationError>;

/// 应用层门面
#[derive(Clone)]
pub struct LibraryService {
    store: Arc<dyn LibraryStorePort>,
    generator: Arc<dyn TextGenerationPort>,
    sessions: Arc<dyn SessionManagerPort>,
    session_idle_secs: u64,
}

impl LibraryService {
    pub fn new(
        store: Arc<dyn LibraryStorePort>,
        generator: Arc<dyn TextGenerationPort>,
        sessions: Arc<dyn SessionManagerPort>,
        session_idle_secs: u64,
    ) -> Self {
        Self {
            store,
            generator,
            sessions,
            session_idle_secs,
        }
    }

    /// 文本生成服务是否可用
    pub async fn generation_available(&self) -> bool {
        self.generator.health_check().await
    }

    // ========================================================================
    // 用户与会话
    // ========================================================================

    pub async fn get_user(&self, query: GetUser) -> Result<User> {
        GetUserHandler::new(self.store.clone()).handle(query).await
    }

    /// 根据会话令牌解析当前用户
    pub async fn current_user(&self, query: GetSessionUser) -> Result<User> {
        GetSessionUserHandler::new(
            self.store.clone(),
            self.sessions.clone(),
            self.session_idle_secs,
        )
        .handle(query)
        .await
    }

    pub async fn login(&self, command: Login) -> Result<LoginResponse> {
        LoginHandler::new(self.store.clone(), self.sessions.clone())
            .handle(command)
            .await
    }

    pub fn logout(&self, command: Logout) -> Result<()> {
        LogoutHandler::new(self.sessions.clone()).handle(command)
    }

    // ========================================================================
    // 小说
    // ========================================================================

    pub async fn get_novel(&self, query: GetNovel) -> Result<Novel> {
        GetNovelHandler::new(self.store.clone()).handle(query).await
    }

    pub async fn list_novels(&self, query: ListNovels) -> Result<Vec<Novel>> {
        ListNovelsHandler::new(self.store.clone()).handle(query).await
    }

    pub async fn list_novels_by_author(&self, query: ListNovelsByAuthor) -> Result<Vec<Novel>> {
        ListNovelsByAuthorHandler::new(self.store.clone())
            .handle(query)
            .await
    }

    pub async fn create_novel(&self, command: CreateNovel) -> Result<Novel> {
        CreateNovelHandler::new(self.store.clone()).handle(command).await
    }

    pub async fn update_novel(&self, command: UpdateNovel) -> Result<Novel> {
        UpdateNovelHandler::new(self.store.clone()).handle(command).await
    }

    // ========================================================================
    // 章节
    // ========================================================================

    pub async fn get_chapter(&self, query: GetChapter) -> Result<Chapter> {
        GetChapterHandler::new(self.store.clone()).handle(query).await
    }

    pub async fn list_chapters(&self, query: ListChapters) -> Result<Vec<Chapter>> {
        ListChaptersHandler::new(self.store.clone()).handle(query).await
    }

    pub async fn chapter_tree(&self, query: GetChapterTree) -> Result<ChapterTree> {
        GetChapterTreeHandler::new(self.store.clone()).handle(query).await
    }

    pub async fn chapter_neighbors(&self, query: GetChapterNeighbors) -> Result<ChapterNeighbors> {
        GetChapterNeighborsHandler::new(self.store.clone())
            .handle(query)
            .await
    }

    pub async fn save_chapter(&self, command: SaveChapter) -> Result<Chapter> {
        SaveChapterHandler::new(self.store.clone()).handle(command).await
    }

    pub async fn delete_chapter(&self, command: DeleteChapter) -> Result<Vec<ChapterId>> {
        DeleteChapterHandler::new(self.store.clone()).handle(command).await
    }

    // ========================================================================
    // 文本生成
    // ========================================================================

    pub async fn generate_synopsis(&self, command: GenerateSynopsis) -> Result<String> {
        GenerateSynopsisHandler::new(self.generator.clone())
            .handle(command)
            .await
    }

    /// 续写草稿，失败时草稿不变
    pub async fn continue_draft(
        &self,
        command: ContinueDraft,
        draft: &mut ChapterDraft,
    ) -> Result<String> {
        ContinueDraftHandler::new(self.store.clone(), self.generator.clone())
            .handle(command, draft)
            .await
    }

    pub async fn summarize_chapter(&self, command: SummarizeChapter) -> Result<String> {
        SummarizeChapterHandler::new(self.store.clone(), self.generator.clone())
            .handle(command)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::{NovelId, NovelStatus};
    use crate::domain::user::{UserId, UserRole};
    use crate::domain::ReadingOrder;
    use crate::infrastructure::adapters::FakeTextGenerator;
    use crate::infrastructure::memory::{demo_library, InMemoryLibraryStore, InMemorySessionManager};

    fn service_with(generator: Arc<dyn TextGenerationPort>) -> LibraryService {
        let store = Arc::new(InMemoryLibraryStore::from_seed(demo_library().unwrap(), None));
        LibraryService::new(store, generator, Arc::new(InMemorySessionManager::new()), 3600)
    }

    fn service() -> LibraryService {
        service_with(Arc::new(FakeTextGenerator::replying("The ship drifted on.")))
    }

    fn create(caller: &str, title: &str, genre: &str) -> CreateNovel {
        CreateNovel {
            caller: UserId::from(caller),
            title: title.to_string(),
            description: String::new(),
            genre: genre.to_string(),
            status: NovelStatus::Hiatus,
            cover_url: String::new(),
        }
    }

    fn new_chapter(novel_id: &NovelId, parent: Option<&ChapterId>, title: &str) -> SaveChapter {
        SaveChapter {
            caller: UserId::from("u1"),
            chapter_id: None,
            novel_id: novel_id.clone(),
            parent_id: parent.cloned(),
            title: title.to_string(),
            content: String::new(),
            order_index: 0,
            is_published: false,
        }
    }

    #[tokio::test]
    async fn test_create_novel_keeps_supplied_status() {
        let service = service();
        let novel = service.create_novel(create("u1", "T", "Fantasy")).await.unwrap();

        assert_eq!(novel.created_at(), novel.updated_at());
        assert_eq!(novel.status(), NovelStatus::Hiatus);
        assert_eq!(novel.author_id(), &UserId::from("u1"));

        let mine = service
            .list_novels_by_author(ListNovelsByAuthor {
                author_id: UserId::from("u1"),
            })
            .await
            .unwrap();
        assert_eq!(mine[0].id(), novel.id());
    }

    #[tokio::test]
    async fn test_update_novel_by_author_only() {
        let service = service();
        let update = |caller: &str| UpdateNovel {
            caller: UserId::from(caller),
            novel_id: NovelId::from("n2"),
            title: "Echoes of the Forest".to_string(),
            description: "Revised".to_string(),
            genre: "Fantasy".to_string(),
            status: NovelStatus::Hiatus,
            cover_url: String::new(),
        };

        let before = service
            .get_novel(GetNovel {
                novel_id: NovelId::from("n2"),
            })
            .await
            .unwrap();
        let updated = service.update_novel(update("u1")).await.unwrap();
        assert_eq!(updated.status(), NovelStatus::Hiatus);
        assert_eq!(updated.description(), "Revised");
        assert_eq!(updated.created_at(), before.created_at());
        assert!(updated.updated_at() > before.updated_at());

        let err = service.update_novel(update("u2")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_reader_cannot_create_novel() {
        let service = service();
        let err = service.create_novel(create("u2", "T", "Fantasy")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::PermissionDenied(_)));

        let err = service.create_novel(create("ghost", "T", "Fantasy")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let service = service();
        let err = service.create_novel(create("u1", "  ", "Fantasy")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_root_then_child_forms_tree() {
        let service = service();
        let novel = service.create_novel(create("u1", "T", "Fantasy")).await.unwrap();

        let c1 = service.save_chapter(new_chapter(novel.id(), None, "C1")).await.unwrap();
        let c1a = service
            .save_chapter(new_chapter(novel.id(), Some(c1.id()), "C1a"))
            .await
            .unwrap();

        let tree = service
            .chapter_tree(GetChapterTree {
                novel_id: novel.id().clone(),
            })
            .await
            .unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.roots()[0].chapter.id(), c1.id());
        assert_eq!(tree.roots()[0].children.len(), 1);
        assert_eq!(tree.roots()[0].children[0].id(), c1a.id());

        let touched = service
            .get_novel(GetNovel {
                novel_id: novel.id().clone(),
            })
            .await
            .unwrap();
        assert!(touched.updated_at() >= novel.updated_at());
    }

    #[tokio::test]
    async fn test_nested_parent_rejected() {
        let service = service();
        let n1 = NovelId::from("n1");

        let err = service
            .save_chapter(new_chapter(&n1, Some(&ChapterId::from("c2-1")), "Too deep"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));

        let chapters = service
            .list_chapters(ListChapters { novel_id: n1 })
            .await
            .unwrap();
        assert_eq!(chapters.len(), 3);
    }

    #[tokio::test]
    async fn test_save_existing_updates_in_place() {
        let service = service();
        let chapter = service
            .get_chapter(GetChapter {
                chapter_id: ChapterId::from("c1"),
            })
            .await
            .unwrap();

        let mut draft = ChapterDraft::from_chapter(&chapter);
        draft.title = "Departure (revised)".to_string();
        let saved = service.save_chapter(draft.to_command(UserId::from("u1"))).await.unwrap();

        assert_eq!(saved.id(), chapter.id());
        assert_eq!(saved.title().as_str(), "Departure (revised)");
        assert!(saved.updated_at() >= chapter.updated_at());
    }

    #[tokio::test]
    async fn test_non_author_writes_rejected() {
        let service = service();
        let mut command = new_chapter(&NovelId::from("n1"), None, "Intrusion");
        command.caller = UserId::from("u2");

        let err = service.save_chapter(command).await.unwrap_err();
        assert!(matches!(err, ApplicationError::PermissionDenied(_)));

        let err = service
            .delete_chapter(DeleteChapter {
                caller: UserId::from("u2"),
                chapter_id: ChapterId::from("c1"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let service = service();
        let removed = service
            .delete_chapter(DeleteChapter {
                caller: UserId::from("u1"),
                chapter_id: ChapterId::from("c2"),
            })
            .await
            .unwrap();
        assert_eq!(removed.len(), 2);

        let err = service
            .get_chapter(GetChapter {
                chapter_id: ChapterId::from("c2-1"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_neighbors_by_reading_order() {
        let service = service();
        let query = |order| GetChapterNeighbors {
            novel_id: NovelId::from("n1"),
            chapter_id: ChapterId::from("c2"),
            order,
        };

        let flat = service
            .chapter_neighbors(query(ReadingOrder::InsertionOrder))
            .await
            .unwrap();
        assert_eq!(flat.previous.unwrap().id().as_str(), "c2-1");
        assert!(flat.next.is_none());

        let tree = service
            .chapter_neighbors(query(ReadingOrder::TreeOrder))
            .await
            .unwrap();
        assert_eq!(tree.previous.unwrap().id().as_str(), "c1");
        assert_eq!(tree.next.unwrap().id().as_str(), "c2-1");
    }

    #[tokio::test]
    async fn test_continue_draft_appends_on_success() {
        let service = service();
        let mut draft = ChapterDraft::new(NovelId::from("n1"));
        draft.content = "The engines fell silent.".to_string();

        let continuation = service
            .continue_draft(
                ContinueDraft {
                    novel_id: NovelId::from("n1"),
                },
                &mut draft,
            )
            .await
            .unwrap();

        assert_eq!(continuation, "The ship drifted on.");
        assert_eq!(draft.content, "The engines fell silent.\n\nThe ship drifted on.");
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_draft_unchanged() {
        let generator = Arc::new(FakeTextGenerator::failing("quota exceeded"));
        let service = service_with(generator.clone());
        let mut draft = ChapterDraft::new(NovelId::from("n1"));
        draft.content = "Unfinished".to_string();
        let before = draft.clone();

        let err = service
            .continue_draft(
                ContinueDraft {
                    novel_id: NovelId::from("n1"),
                },
                &mut draft,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::GenerationFailed(_)));
        assert_eq!(draft, before);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_generation_is_failure() {
        let service = service_with(Arc::new(FakeTextGenerator::replying("   ")));
        let err = service
            .generate_synopsis(GenerateSynopsis {
                title: "T".to_string(),
                genre: "Fantasy".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn test_summarize_chapter() {
        let service = service();
        let summary = service
            .summarize_chapter(SummarizeChapter {
                chapter_id: ChapterId::from("c1"),
            })
            .await
            .unwrap();
        assert!(!summary.is_empty());

        let err = service
            .summarize_chapter(SummarizeChapter {
                chapter_id: ChapterId::from("missing"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_login_session_lifecycle() {
        let service = service();
        let login = service.login(Login { role: UserRole::Reader }).await.unwrap();
        assert_eq!(login.user.id().as_str(), "u2");

        let user = service
            .current_user(GetSessionUser {
                session_id: login.session_id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(user.id(), login.user.id());

        service
            .logout(Logout {
                session_id: login.session_id.clone(),
            })
            .unwrap();
        let err = service
            .current_user(GetSessionUser {
                session_id: login.session_id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthenticated(_)));

        let err = service.login(Login { role: UserRole::Admin }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
