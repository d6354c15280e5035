use super::{BoundRequest, query_suffix};

fn method_name(method: &str) -> String {
  let mut chars = method.chars();
  match chars.next() {
    Some(first) => format!("{}{}Async", first.to_uppercase(), chars.as_str().to_lowercase()),
    None => "Async".to_string(),
  }
}

/// C# top-level program on `HttpClient`; the verb becomes the capitalized
/// `<Verb>Async` method name.
pub fn render(request: &BoundRequest) -> String {
  let send_form = request.body.is_none() && !request.form.is_empty();

  let mut code = String::new();
  code.push_str("using System;\n");
  if send_form {
    code.push_str("using System.Collections.Generic;\n");
  }
  code.push_str("using System.Net.Http;\n");
  if request.body.is_some() {
    code.push_str("using System.Text;\nusing System.Text.Json;\n");
  }
  code.push('\n');

  code.push_str("var client = new HttpClient();\n");
  for (name, value) in &request.headers {
    code.push_str(&format!("client.DefaultRequestHeaders.Add(\"{name}\", \"{value}\");\n"));
  }
  code.push('\n');

  code.push_str(&format!("var url = \"{}{}\";\n", request.url, query_suffix(request)));

  if let Some(body) = &request.body {
    code.push_str(&format!(
      "var content = new StringContent(JsonSerializer.Serialize({body}), Encoding.UTF8, \"application/json\");\n"
    ));
  } else if send_form {
    code.push_str("var content = new FormUrlEncodedContent(new Dictionary<string, string>\n{\n");
    for (name, value) in &request.form {
      code.push_str(&format!("    {{ \"{name}\", \"{value}\" }},\n"));
    }
    code.push_str("});\n");
  }

  let call = method_name(&request.method);
  if request.body.is_some() || send_form {
    code.push_str(&format!("\nvar response = await client.{call}(url, content);\n"));
  } else {
    code.push_str(&format!("\nvar response = await client.{call}(url);\n"));
  }
  code.push_str("var body = await response.Content.ReadAsStringAsync();\n\n");

  code.push_str("Console.WriteLine((int)response.StatusCode);\n");
  code.push_str("Console.WriteLine(body);\n");

  code
}
