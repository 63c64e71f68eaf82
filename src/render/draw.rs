use std::f64::consts::{PI, TAU};

use crate::error::Result;
use crate::hyperbolic::{InfPoint, KleinCoords, Line, Point, Segment, Transform};
use crate::math::normalize_angle;

use super::{Draw, HyperbolicContext, Model, Renderer};

fn draw_dot<R, P>(ctx: &mut HyperbolicContext<'_, R>, p: &P)
where
    R: Renderer + ?Sized,
    P: KleinCoords,
{
    let at = ctx.project(p);
    let radius = ctx.style().point_radius;
    ctx.renderer().move_to(at.x + radius, at.y);
    ctx.renderer().arc(at.x, at.y, radius, 0.0, TAU);
    ctx.renderer().fill();
}

fn draw_straight<R, P>(ctx: &mut HyperbolicContext<'_, R>, a: &P, b: &P)
where
    R: Renderer + ?Sized,
    P: KleinCoords,
{
    let a = ctx.project(a);
    let b = ctx.project(b);
    ctx.renderer().move_to(a.x, a.y);
    ctx.renderer().line_to(b.x, b.y);
    ctx.renderer().stroke();
}

impl Draw for Point {
    fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        let mapped = ctx.view().map(self)?;
        draw_dot(ctx, &mapped);
        Ok(())
    }
}

impl Draw for InfPoint {
    fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        let mapped = ctx.view().map(self)?;
        draw_dot(ctx, &mapped);
        Ok(())
    }
}

impl Draw for Line {
    fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        let mapped = ctx.view().map(self)?;
        match (ctx.model(), mapped.poincare_circle()) {
            (Model::Poincare, Some(circle)) => ctx.clipped_to_disk(|ctx| {
                let r = ctx.renderer();
                r.move_to(circle.cx + circle.r, circle.cy);
                r.arc(circle.cx, circle.cy, circle.r, 0.0, TAU);
                r.stroke();
            }),
            _ => draw_straight(ctx, mapped.p1(), mapped.p2()),
        }
        Ok(())
    }
}

impl<P> Draw for Segment<P>
where
    P: KleinCoords + Transform,
{
    fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        let mapped = ctx.view().map(self)?;
        let circle = match ctx.model() {
            Model::Klein => None,
            Model::Poincare => mapped.line().and_then(|line| line.poincare_circle()),
        };
        let Some(circle) = circle else {
            draw_straight(ctx, mapped.p1(), mapped.p2());
            return Ok(());
        };

        let a = mapped.p1().poincare();
        let b = mapped.p2().poincare();
        let a0 = (a.y - circle.cy).atan2(a.x - circle.cx);
        let a1 = (b.y - circle.cy).atan2(b.x - circle.cx);
        // Take the short way round; the long way leaves the disk.
        let sweep = normalize_angle(a1 - a0);
        let (start, end, from) = if sweep <= PI {
            (a0, a0 + sweep, a)
        } else {
            (a1, a1 + (TAU - sweep), b)
        };
        let r = ctx.renderer();
        r.move_to(from.x, from.y);
        r.arc(circle.cx, circle.cy, circle.r, start, end);
        r.stroke();
        Ok(())
    }
}
