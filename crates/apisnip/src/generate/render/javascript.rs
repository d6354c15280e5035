use super::{BoundRequest, query_suffix};

/// JavaScript via global `fetch`, wrapped in an async IIFE so the output
/// stays a plain `.js` script.
pub fn render(request: &BoundRequest) -> String {
  let send_form = request.body.is_none() && !request.form.is_empty();

  let mut code = String::new();
  code.push_str(&format!("const url = \"{}{}\";\n\n", request.url, query_suffix(request)));

  code.push_str("(async () => {\n");
  code.push_str("  const response = await fetch(url, {\n");
  code.push_str(&format!("    method: \"{}\",\n", request.method.to_uppercase()));

  if !request.headers.is_empty() {
    code.push_str("    headers: {\n");
    for (name, value) in &request.headers {
      code.push_str(&format!("      \"{name}\": \"{value}\",\n"));
    }
    code.push_str("    },\n");
  }

  if let Some(body) = &request.body {
    // Spliced verbatim; the value must already be a JavaScript expression.
    code.push_str(&format!("    body: JSON.stringify({body}),\n"));
  } else if send_form {
    code.push_str("    body: new URLSearchParams({\n");
    for (name, value) in &request.form {
      code.push_str(&format!("      \"{name}\": \"{value}\",\n"));
    }
    code.push_str("    }),\n");
  }

  code.push_str("  });\n\n");
  code.push_str("  const text = await response.text();\n");
  code.push_str("  console.log(response.status);\n");
  code.push_str("  console.log(text);\n");
  code.push_str("})();\n");

  code
}
