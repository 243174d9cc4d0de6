//! Job submission page mounted at the `home` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logged-out visitors get links to `login` / `register`. Logged-in users can
//! upload an image with a processing kind, or log out, which clears the
//! session in place and keeps them on this route.
//!
//! After a successful upload the page loads the job's image list and shows a
//! preview per image. Image bytes sit behind the `Authorization` header, so
//! previews are fetched as blobs and shown through `blob:` object URLs that
//! are revoked when the results are replaced or cleared.

#[cfg(test)]
#[path = "submit_job_test.rs"]
mod submit_job_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{JobKind, JobStatus};
use crate::routes::RouteName;
use crate::state::session::SessionStore;

const NO_FILE: &str = "No file is received.";
const LOGIN_REQUIRED: &str = "Log in to submit jobs.";

/// Require a selected file with a non-blank name.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn validate_job_file(file_name: Option<&str>) -> Result<(), &'static str> {
    match file_name {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(NO_FILE),
    }
}

/// Map the `<select>` value onto a job kind, keeping `current` on garbage.
fn select_job_kind(value: &str, current: JobKind) -> JobKind {
    value.parse().unwrap_or(current)
}

/// Loaded preview for one image of the current job.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct Preview {
    image: String,
    url: String,
}

fn preview_url(previews: &[Preview], image: &str) -> Option<String> {
    previews.iter().find(|p| p.image == image).map(|p| p.url.clone())
}

fn results_summary(status: &JobStatus) -> String {
    match status.images.len() {
        0 => "No images yet.".to_owned(),
        1 => "1 image ready.".to_owned(),
        n => format!("{n} images ready."),
    }
}

/// Signals and handles shared by the page's event handlers.
#[derive(Clone, Copy)]
struct JobPage {
    session: RwSignal<SessionStore>,
    api_base: StoredValue<String>,
    kind: RwSignal<JobKind>,
    file_input: NodeRef<leptos::html::Input>,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
    job: RwSignal<Option<JobStatus>>,
    previews: RwSignal<Vec<Preview>>,
}

impl JobPage {
    fn authorization(self) -> Option<String> {
        let header = self.session.with_untracked(SessionStore::authorization_header);
        if header.is_none() {
            self.info.set(LOGIN_REQUIRED.to_owned());
        }
        header
    }

    fn clear_results(self) {
        self.job.set(None);
        self.previews.update(|previews| {
            #[cfg(feature = "hydrate")]
            release_previews(previews);
            previews.clear();
        });
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn start_upload(page: JobPage, authorization: String) {
    #[cfg(feature = "hydrate")]
    {
        let file = page.file_input.get().and_then(|el| el.files()).and_then(|files| files.get(0));
        if let Err(msg) = validate_job_file(file.as_ref().map(web_sys::File::name).as_deref()) {
            page.info.set(msg.to_owned());
            return;
        }
        let Some(file) = file else {
            return;
        };
        let kind = page.kind.get_untracked();
        page.busy.set(true);
        page.info.set("Submitting...".to_owned());
        leptos::task::spawn_local(async move {
            let api_base = page.api_base.get_value();
            match crate::net::api::submit_job(&api_base, &authorization, &file, kind).await {
                Ok(job_id) => {
                    page.info.set(format!("Job {job_id} submitted."));
                    load_job(page, authorization, job_id);
                }
                Err(e) => page.info.set(format!("Submit failed: {e}")),
            }
            page.busy.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        page.info.set(crate::net::api::ApiError::Unavailable.to_string());
    }
}

/// Fetch the job's image list, then its previews.
fn load_job(page: JobPage, authorization: String, job_id: String) {
    leptos::task::spawn_local(async move {
        let api_base = page.api_base.get_value();
        match crate::net::api::fetch_job(&api_base, &authorization, &job_id).await {
            Ok(status) => {
                page.clear_results();
                page.job.set(Some(status.clone()));
                #[cfg(feature = "hydrate")]
                load_previews(page, &api_base, &authorization, &status).await;
            }
            Err(e) => page.info.set(format!("Could not load job {job_id}: {e}")),
        }
    });
}

#[cfg(feature = "hydrate")]
async fn load_previews(page: JobPage, api_base: &str, authorization: &str, status: &JobStatus) {
    let mut loaded = Vec::with_capacity(status.images.len());
    for image in &status.images {
        match crate::net::api::fetch_image(api_base, authorization, &image.pk).await {
            Ok(url) => loaded.push(Preview { image: image.pk.clone(), url }),
            Err(e) => log::warn!("job: preview for image {} failed: {e}", image.pk),
        }
    }
    page.previews.update(|previews| {
        release_previews(previews);
        *previews = loaded;
    });
}

#[cfg(feature = "hydrate")]
fn release_previews(previews: &[Preview]) {
    for preview in previews {
        if let Err(e) = web_sys::Url::revoke_object_url(&preview.url) {
            log::debug!("job: could not revoke {}: {e:?}", preview.url);
        }
    }
}

#[component]
pub fn SubmitJobPage() -> impl IntoView {
    let page = JobPage {
        session: expect_context::<RwSignal<SessionStore>>(),
        api_base: StoredValue::new(expect_context::<ClientConfig>().api_base),
        kind: RwSignal::new(JobKind::default()),
        file_input: NodeRef::new(),
        info: RwSignal::new(String::new()),
        busy: RwSignal::new(false),
        job: RwSignal::new(None),
        previews: RwSignal::new(Vec::new()),
    };

    let logged_in = move || page.session.with(SessionStore::logged_in);

    let on_logout = move |_| {
        page.session.update(|s| {
            s.log_out();
        });
        page.clear_results();
        page.info.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if page.busy.get() {
            return;
        }
        if let Some(authorization) = page.authorization() {
            start_upload(page, authorization);
        }
    };

    let results = move || {
        let previews = page.previews.get();
        page.job.get().map(|status| {
            let job_id = status.pk.clone();
            let title = format!("Job {job_id}");
            let images = status
                .images
                .iter()
                .map(|image| {
                    let pk = image.pk.clone();
                    let src = preview_url(&previews, &pk);
                    view! {
                        <li class="job-image">
                            {src.map(|src| view! { <img class="job-image-preview" src=src alt=format!("image {pk}")/> })}
                            <span class="job-image-id">{pk.clone()}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <section class="job-results">
                    <h2>{title}</h2>
                    <p class="job-results-summary">{results_summary(&status)}</p>
                    <ul class="job-images">{images}</ul>
                    <button
                        class="job-button job-button--secondary"
                        type="button"
                        on:click=move |_| {
                            if let Some(authorization) = page.authorization() {
                                load_job(page, authorization, job_id.clone());
                            }
                        }
                    >
                        "Refresh"
                    </button>
                </section>
            }
        })
    };

    let job_form = move || {
        view! {
            <form class="job-form" on:submit=on_submit>
                <input class="job-file" type="file" accept="image/*" node_ref=page.file_input/>
                <select
                    class="job-kind"
                    on:change=move |ev| {
                        page.kind.set(select_job_kind(&event_target_value(&ev), page.kind.get_untracked()));
                    }
                >
                    {JobKind::ALL
                        .into_iter()
                        .map(|k| {
                            view! {
                                <option value=k.as_str() selected=move || page.kind.get() == k>
                                    {k.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="job-button" type="submit" disabled=move || page.busy.get()>
                    "Submit job"
                </button>
                <button class="job-button job-button--secondary" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </form>
            {results}
        }
    };

    view! {
        <div class="job-page">
            <h1>"Image jobs"</h1>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <p class="job-login-prompt">
                            "Please "
                            <a href=RouteName::Login.path()>"sign in"</a>
                            " or "
                            <a href=RouteName::Register.path()>"register"</a>
                            " to submit jobs."
                        </p>
                    }
                }
            >
                {job_form}
            </Show>
            <Show when=move || !page.info.get().is_empty()>
                <p class="job-message">{move || page.info.get()}</p>
            </Show>
        </div>
    }
}
