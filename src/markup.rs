//! Markup, style, and script text for the widget's display payloads.
//!
//! Every selector and element id is parameterized by the widget identifier so
//! that several bars can coexist on one page without their styles or update
//! scripts colliding.

/// Renders the one-time mount markup: a scoped `<style>` block plus the
/// container and bar elements it targets.
pub(crate) fn mount_html(id: &str) -> String {
    format!(
        r#"<style>
  /*
   * Bar styling adapted from the animated progress bar snippet by
   * Thibaut Courouble, licensed under the MIT License:
   * http://www.cssflow.com/snippets/animated-progress-bar/demo/scss
   */
  .progress-wrap {{
    margin: 10px auto;
    width: auto;
    text-align: center;
  }}

  .progress-wrap .progress-{id} {{
    margin: 0 5% auto;
    width: auto;
  }}

  .progress-{id} {{
    padding: 4px;
    background: rgba(0, 0, 0, 0.25);
    color: rgba(0, 0, 0, 0.5);
    border-radius: 6px;
    -webkit-box-shadow: inset 0 1px 2px rgba(0, 0, 0, 0.25), 0 1px rgba(255, 255, 255, 0.08);
    box-shadow: inset 0 1px 2px rgba(0, 0, 0, 0.25), 0 1px rgba(255, 255, 255, 0.08);
  }}

  .progress-bar-{id} {{
    height: 16px;
    border-radius: 4px;
    background-image: -webkit-linear-gradient(top, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.05));
    background-image: -moz-linear-gradient(top, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.05));
    background-image: -o-linear-gradient(top, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.05));
    background-image: linear-gradient(to bottom, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.05));
    -webkit-transition: 0.4s linear;
    -moz-transition: 0.4s linear;
    -o-transition: 0.4s linear;
    transition: 0.4s linear;
    -webkit-transition-property: width, background-color;
    -moz-transition-property: width, background-color;
    -o-transition-property: width, background-color;
    transition-property: width, background-color;
    -webkit-box-shadow: 0 0 1px 1px rgba(0, 0, 0, 0.25), inset 0 1px rgba(255, 255, 255, 0.1);
    box-shadow: 0 0 1px 1px rgba(0, 0, 0, 0.25), inset 0 1px rgba(255, 255, 255, 0.1);
  }}

  .progress-{id} > .progress-bar-{id} {{
    width: 10%;
    background-color: #fee493;
  }}
</style>
<div class="progress-wrap">
  <div class="progress-{id}">
    <div id="progress-bar-{id}" class="progress-bar-{id}"></div>
  </div>
</div>
"#
    )
}

/// Renders the script snippet that looks up the scoped bar element and
/// mutates its width and background color.
pub(crate) fn update_script(id: &str, width: u32, color: &str) -> String {
    format!(
        r##"var progbar = document.querySelector(".progress-{id} > .progress-bar-{id}");

progbar.style.width = "{width}%";
progbar.style.backgroundColor = "#{color}";
"##
    )
}
