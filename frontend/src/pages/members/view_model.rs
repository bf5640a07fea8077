use super::{
    repository::MembersRepository,
    utils::{can_delete, filter_members, MemberFormState},
};
use crate::api::{ApiClient, ApiError, CreateMember, Member, UpdateMember};
use crate::state::auth::use_auth;
use crate::utils::{
    message::MessageState,
    pagination::{paginate, Page, DEFAULT_PER_PAGE},
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum MemberSave {
    Create(CreateMember),
    Update(String, UpdateMember),
}

#[derive(Clone, Copy)]
pub struct MembersViewModel {
    pub members_resource: Resource<u32, Result<Vec<Member>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub query: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub visible: Memo<Page<Member>>,
    pub current_user_id: Memo<Option<String>>,
    pub messages: RwSignal<MessageState>,
    pub form: RwSignal<MemberFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub editing: RwSignal<Option<Member>>,
    pub dialog_open: RwSignal<bool>,
    pub delete_target: RwSignal<Option<Member>>,
    pub save_action: Action<MemberSave, Result<Member, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl MembersViewModel {
    pub fn new() -> Self {
        let (auth, _) = use_auth();
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = MembersRepository::new_with_client(Rc::new(api));

        let reload = create_rw_signal(0u32);
        let query = create_rw_signal(String::new());
        let page = create_rw_signal(1usize);
        let messages = create_rw_signal(MessageState::default());
        let form = create_rw_signal(MemberFormState::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let editing = create_rw_signal(None::<Member>);
        let dialog_open = create_rw_signal(false);
        let delete_target = create_rw_signal(None::<Member>);
        let current_user_id =
            create_memo(move |_| auth.get().user.as_ref().map(|user| user.id.clone()));

        let repo = repository.clone();
        let members_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_members().await }
            },
        );

        let visible = create_memo(move |_| {
            let members = members_resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default();
            let filtered = filter_members(&members, &query.get());
            paginate(&filtered, page.get(), DEFAULT_PER_PAGE)
        });

        let repo = repository.clone();
        let save_action = create_action(move |request: &MemberSave| {
            let repo = repo.clone();
            let request = request.clone();
            async move {
                match request {
                    MemberSave::Create(payload) => repo.create_member(payload).await,
                    MemberSave::Update(id, payload) => repo.update_member(id, payload).await,
                }
            }
        });

        let repo = repository;
        let delete_action = create_action(move |member_id: &String| {
            let repo = repo.clone();
            let member_id = member_id.clone();
            async move { repo.delete_member(member_id).await }
        });

        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(member) => {
                        messages.update(|state| {
                            state.set_success(format!("Member '{}' saved.", member.name))
                        });
                        dialog_open.set(false);
                        form.update(MemberFormState::reset);
                        editing.set(None);
                        bump();
                    }
                    Err(err) => form_error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        messages.update(|state| state.set_success("Member deleted."));
                        bump();
                    }
                    Err(err) => messages.update(|state| state.set_error(err.error)),
                }
            }
        });

        Self {
            members_resource,
            reload,
            query,
            page,
            visible,
            current_user_id,
            messages,
            form,
            form_error,
            editing,
            dialog_open,
            delete_target,
            save_action,
            delete_action,
        }
    }

    pub fn set_query(&self, value: String) {
        self.query.set(value);
        self.page.set(1);
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.set(MemberFormState::default());
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, member: Member) {
        self.form.set(MemberFormState::from_member(&member));
        self.editing.set(Some(member));
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
        self.form_error.set(None);
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        let request = match self.editing.get_untracked() {
            Some(member) => form
                .to_update()
                .map(|payload| MemberSave::Update(member.id, payload)),
            None => form.to_create().map(MemberSave::Create),
        };
        match request {
            Ok(request) => {
                self.form_error.set(None);
                self.save_action.dispatch(request);
            }
            Err(msg) => self.form_error.set(Some(ApiError::validation(msg))),
        }
    }

    pub fn request_delete(&self, member: Member) {
        if !can_delete(&member, self.current_user_id.get_untracked().as_deref()) {
            self.messages
                .update(|state| state.set_error("You cannot delete your own account."));
            return;
        }
        self.delete_target.set(Some(member));
    }

    pub fn confirm_delete(&self) {
        if let Some(member) = self.delete_target.get_untracked() {
            self.messages.update(MessageState::clear);
            self.delete_action.dispatch(member.id);
        }
        self.delete_target.set(None);
    }
}

pub fn use_members_view_model() -> MembersViewModel {
    MembersViewModel::new()
}
