use super::BoundRequest;

/// Python via `requests`. The one target where the query map is passed as a
/// structured `params` dict instead of being inlined into the URL.
pub fn render(request: &BoundRequest) -> String {
  let mut code = String::new();
  code.push_str("import requests\n\n");
  code.push_str(&format!("url = \"{}\"\n", request.url));

  if !request.query.is_empty() {
    code.push_str("params = {\n");
    for (name, value) in &request.query {
      code.push_str(&format!("    \"{name}\": \"{value}\",\n"));
    }
    code.push_str("}\n");
  }

  if !request.headers.is_empty() {
    code.push_str("headers = {\n");
    for (name, value) in &request.headers {
      code.push_str(&format!("    \"{name}\": \"{value}\",\n"));
    }
    code.push_str("}\n");
  }

  let send_form = request.body.is_none() && !request.form.is_empty();
  if send_form {
    code.push_str("data = {\n");
    for (name, value) in &request.form {
      code.push_str(&format!("    \"{name}\": \"{value}\",\n"));
    }
    code.push_str("}\n");
  }

  code.push_str(&format!("\nresponse = requests.{}(\n    url,\n", request.method));
  if !request.query.is_empty() {
    code.push_str("    params=params,\n");
  }
  if !request.headers.is_empty() {
    code.push_str("    headers=headers,\n");
  }
  if let Some(body) = &request.body {
    // Spliced verbatim; the value must already be a Python literal.
    code.push_str(&format!("    json={body},\n"));
  } else if send_form {
    code.push_str("    data=data,\n");
  }
  code.push_str(")\n\n");

  code.push_str("print(response.status_code)\n");
  code.push_str("print(response.text)\n");

  code
}
