use maud::{html, Markup};
use poem::handler;
use poem::web::{Data, Form, Html, Json};
use serde::Serialize;

use crate::dataset::{Region, Sex, Smoker};
use crate::model::{Person, RandomForestRegressor};
use crate::prelude::*;
use crate::web::partials::{document, Float, Page, SUPPORT_EMAIL};

/// Form defaults before the first submission.
const BLANK: Person = Person {
    age: 0,
    sex: Sex::Male,
    bmi: 0.0,
    children: 0,
    smoker: Smoker::Yes,
    region: Region::SouthEast,
};

/// Prediction page with an empty form.
#[handler]
#[instrument(skip_all)]
pub async fn get() -> Html<String> {
    Html(render_page(&BLANK, None).into_string())
}

/// Form submission: encodes the person through the model's recorded feature
/// names and renders the predicted expense.
#[handler]
#[instrument(skip_all)]
pub async fn post(
    Form(person): Form<Person>,
    Data(model): Data<&Arc<RandomForestRegressor>>,
) -> Result<Html<String>> {
    let prediction = model.predict_person(&person)?;
    info!(age = person.age, prediction = prediction, "predicted");
    Ok(Html(render_page(&person, Some(prediction)).into_string()))
}

#[derive(Serialize)]
pub struct Prediction {
    pub expenses: f64,
}

/// JSON variant of the prediction for programmatic clients.
#[handler]
#[instrument(skip_all)]
pub async fn post_api(
    Json(person): Json<Person>,
    Data(model): Data<&Arc<RandomForestRegressor>>,
) -> Result<Json<Prediction>> {
    let expenses = model.predict_person(&person)?;
    info!(age = person.age, expenses = expenses, "predicted");
    Ok(Json(Prediction { expenses }))
}

fn render_page(person: &Person, prediction: Option<f64>) -> Markup {
    document(
        "预测医疗费用",
        Page::Predict,
        html! {
            div.content {
                h1.title { "使用说明" }
                p { "这个应用利用机器学习模型来预测医疗费用，为保险公司的保险定价提供参考。" }
                ul {
                    li { strong { "👉输入信息" } "：在下面输入被保险人的个人信息、疾病信息等。" }
                    li { strong { "👉费用预测" } "：应用会预测被保险人的未来医疗费用支出。" }
                }
            }

            div.box {
                (form(person))
            }

            @if let Some(prediction) = prediction {
                div.notification.is-success.is-light {
                    p {
                        "根据您输入的数据，预测该客户的医疗费用是："
                        strong { (Float::from(prediction).precision(2)) }
                    }
                    p { "技术支持✉：" (SUPPORT_EMAIL) }
                }
            }
        },
    )
}

fn form(person: &Person) -> Markup {
    html! {
        form method="POST" action="/predict" {
            div.field {
                label.label { "年龄" }
                div.control {
                    input.input type="number" name="age" min="0" step="1" value=(person.age) required;
                }
            }

            div.field {
                label.label { "性别" }
                div.control {
                    label.radio {
                        input type="radio" name="sex" value="男性" checked[person.sex == Sex::Male];
                        " 男性"
                    }
                    label.radio {
                        input type="radio" name="sex" value="女性" checked[person.sex == Sex::Female];
                        " 女性"
                    }
                }
            }

            div.field {
                label.label { "BMI" }
                div.control {
                    input.input type="number" name="bmi" min="0" step="0.1" value=(person.bmi) required;
                }
            }

            div.field {
                label.label { "子女数量" }
                div.control {
                    input.input type="number" name="children" min="0" step="1" value=(person.children) required;
                }
            }

            div.field {
                label.label { "是否吸烟" }
                div.control {
                    label.radio {
                        input type="radio" name="smoker" value="是" checked[person.smoker == Smoker::Yes];
                        " 是"
                    }
                    label.radio {
                        input type="radio" name="smoker" value="否" checked[person.smoker == Smoker::No];
                        " 否"
                    }
                }
            }

            div.field {
                label.label { "区域" }
                div.control {
                    div.select {
                        select name="region" {
                            @for (value, label) in [
                                (Region::SouthEast, "东南部"),
                                (Region::SouthWest, "西南部"),
                                (Region::NorthEast, "东北部"),
                                (Region::NorthWest, "西北部"),
                            ] {
                                option value=(label) selected[person.region == value] { (label) }
                            }
                        }
                    }
                }
            }

            div.field {
                div.control {
                    button.button.is-link type="submit" { "预测费用!" }
                }
            }
        }
    }
}
