//! Bridge parameter form with live validation.
//!
//! Local checks run on every keystroke against the fixed rule table; the
//! backend's `/validate` endpoint can be asked for a second opinion.

use std::collections::BTreeMap;

use bridge_gatekeeper::{
    format_number, validate_parameters, ButtonLabel, ParameterKind, ParameterRule, ParameterSet,
    Severity, ValidationResult, PARAMETER_RULES,
};
use leptos::*;

use crate::endpoint;
use crate::page::{PageContext, SharedGatekeeper};
use crate::services::{validate_remote, write_text};

#[component]
pub fn ParameterPanel(ctx: PageContext) -> impl IntoView {
    let gatekeeper = ctx.gatekeeper;
    let inputs = create_rw_signal(BTreeMap::<String, String>::new());
    let parameters = create_memo(move |_| {
        inputs.with(|raw| ParameterSet::from_form(raw.iter().map(|(k, v)| (k.as_str(), v.as_str()))))
    });
    let local = create_memo(move |_| parameters.with(validate_parameters));
    let server = create_rw_signal(None::<ValidationResult>);
    let checking = create_rw_signal(false);
    let expanded = create_rw_signal(false);

    let fields = PARAMETER_RULES
        .iter()
        .map(|rule| view! { <ParameterField rule=rule inputs=inputs server=server gatekeeper=gatekeeper.clone()/> })
        .collect_view();

    let check_remote = {
        let gatekeeper = gatekeeper.clone();
        move |_: web_sys::MouseEvent| {
            let params = parameters.get_untracked();
            if params.is_empty() {
                gatekeeper
                    .borrow_mut()
                    .show_alert("Enter at least one parameter to check.", Severity::Info);
                return;
            }

            let url = endpoint(&gatekeeper.borrow().config().validate_endpoint);
            let gatekeeper = gatekeeper.clone();
            checking.set(true);
            spawn_local(async move {
                match validate_remote(&url, &params).await {
                    Ok(result) => server.set(Some(result)),
                    Err(e) => {
                        log::error!("Remote validation failed: {}", e);
                        gatekeeper.borrow_mut().show_alert(&e.to_string(), Severity::Danger);
                    }
                }
                checking.set(false);
            });
        }
    };

    view! {
        <div class="card">
            <div class="card-body">
                <h5 class="card-title">"Bridge parameters"</h5>
                <div class="row">{fields}</div>

                {move || errors_view("Local check", local.get())}
                {move || server.get().and_then(|result| errors_view("Server check", result))}

                <button
                    type="button"
                    class="btn btn-outline-primary me-2"
                    disabled=move || checking.get()
                    on:click=check_remote
                >
                    {move || if checking.get() { "Checking..." } else { "Check on server" }}
                </button>

                <button
                    type="button"
                    id="toggleDetailsBtn"
                    class="btn btn-link"
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    {move || {
                        let label = ButtonLabel::details_toggle(expanded.get());
                        view! {
                            <i class=format!("{} me-2", label.icon)></i>
                            {label.text}
                        }
                    }}
                </button>

                <div
                    id="parameterDetails"
                    style:display=move || if expanded.get() { "block" } else { "none" }
                >
                    <table class="table table-sm">
                        <tbody>
                            {move || {
                                PARAMETER_RULES
                                    .iter()
                                    .filter_map(|rule| {
                                        parameters.with(|p| p.get(rule.field)).map(|value| {
                                            view! {
                                                <tr>
                                                    <th>{rule.field}</th>
                                                    <td>{format_number(value, 2)}</td>
                                                </tr>
                                            }
                                        })
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

/// One numeric input with its bounds and a copy button.
#[component]
fn ParameterField(
    rule: &'static ParameterRule,
    inputs: RwSignal<BTreeMap<String, String>>,
    server: RwSignal<Option<ValidationResult>>,
    gatekeeper: SharedGatekeeper,
) -> impl IntoView {
    let field = rule.field;
    let step = match rule.kind {
        ParameterKind::Integer => "1",
        ParameterKind::Number => "any",
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        inputs.update(|raw| {
            raw.insert(field.to_string(), value);
        });
        // a server verdict no longer matches the form
        server.set(None);
    };

    let on_copy = move |_: web_sys::MouseEvent| {
        let value = inputs.with_untracked(|raw| raw.get(field).cloned()).unwrap_or_default();
        let gatekeeper = gatekeeper.clone();
        spawn_local(async move {
            let result = write_text(&value).await.map_err(|e| e.to_string());
            // failures are already alerted
            let _ = gatekeeper.borrow_mut().copy_finished(field, result);
        });
    };

    view! {
        <div class="col-md-4 mb-3">
            <label for=field class="form-label">
                {field}
                <small class="text-muted">{format!(" [{} to {}]", rule.min, rule.max)}</small>
            </label>
            <div class="input-group">
                <input
                    type="number"
                    id=field
                    name=field
                    class="form-control"
                    step=step
                    min=rule.min
                    max=rule.max
                    on:input=on_input
                />
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    title="Copy value"
                    data-button-key=field
                    on:click=on_copy
                >
                    <i class="fas fa-copy"></i>
                </button>
            </div>
        </div>
    }
}

fn errors_view(title: &'static str, result: ValidationResult) -> Option<impl IntoView> {
    (!result.valid).then(|| {
        view! {
            <div class="alert alert-warning">
                <strong>{title}</strong>
                <ul class="mb-0">
                    {result.errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}
