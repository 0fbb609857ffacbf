use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::ports::incoming::use_cases::AdminAccessUseCase;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::ManageCollectionUseCase;
use crate::modules::content::domain::entities::{BlogPost, Skill};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    content: Option<ContentUseCases>,
    admin: Option<Arc<dyn AdminAccessUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: Some(demo_content()),
            admin: Some(Arc::new(StubAdminAccess::viewer())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: ContentUseCases) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_admin(mut self, admin: impl AdminAccessUseCase + Send + Sync + 'static) -> Self {
        self.admin = Some(Arc::new(admin));
        self
    }

    pub fn with_admin_mode(self) -> Self {
        self.with_admin(StubAdminAccess::admin())
    }

    pub fn with_skills(mut self, uc: impl ManageCollectionUseCase<Skill> + 'static) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.skills = Arc::new(uc);
        self
    }

    pub fn with_blog_posts(mut self, uc: impl ManageCollectionUseCase<BlogPost> + 'static) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.blog_posts = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content.expect("content use cases not set"),
            admin: self.admin.expect("admin use case not set"),
        })
    }
}
